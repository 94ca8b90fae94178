//! Test helpers shared by the runas crates.

pub mod sandbox;
pub mod server;

/// Seven consecutive records, U+003D through U+0043.
pub const UCD_3D_TO_43: &str = "\
003D;EQUALS SIGN;Sm;0;ON;;;;;N;;;;;
003E;GREATER-THAN SIGN;Sm;0;ON;;;;;Y;;;;;
003F;QUESTION MARK;Po;0;ON;;;;;N;;;;;
0040;COMMERCIAL AT;Po;0;ON;;;;;N;;;;;
0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061;
0042;LATIN CAPITAL LETTER B;Lu;0;L;;;;;N;;;;0062;
0043;LATIN CAPITAL LETTER C;Lu;0;L;;;;;N;;;;0063;
";

/// A handful of real records with aliases, hyphens and astral code points.
pub const UCD_SAMPLE: &str = "\
0027;APOSTROPHE;Po;0;ON;;;;;N;APOSTROPHE-QUOTE;;;;
002D;HYPHEN-MINUS;Pd;0;ES;;;;;N;;;;;
20A2;CRUZEIRO SIGN;Sc;0;ET;;;;;N;;;;;
2358;APL FUNCTIONAL SYMBOL QUOTE UNDERBAR;So;0;L;;;;;N;;;;;
235E;APL FUNCTIONAL SYMBOL QUOTE QUAD;So;0;L;;;;;N;;;;;
1F638;GRINNING CAT FACE WITH SMILING EYES;So;0;ON;;;;;N;;;;;
1F63A;SMILING CAT FACE WITH OPEN MOUTH;So;0;ON;;;;;N;;;;;
1F63B;SMILING CAT FACE WITH HEART-SHAPED EYES;So;0;ON;;;;;N;;;;;
";

/// Loopback URL nothing listens on; used where a download must not succeed.
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:9/UnicodeData.txt";
