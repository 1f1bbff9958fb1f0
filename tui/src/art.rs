//! Fixed ASCII art assets: the two mascots flanking the question and the
//! celebration.

/// The hopeful mascot shown while the question is pending.
pub const SAD_MASCOT: &str = r"
  (\_/)
  ( ..)
  / > o
";

/// The jumping-for-joy mascot shown during the celebration.
pub const HAPPY_MASCOT: &str = r#"
  \(\_/)/
   (^.^)
  _(")(")_
"#;

/// Number of mosaic cells per axis behind the prompt.
pub const MOSAIC_GRID: u16 = 6;
