/// Published document holding the secret message
pub const DOC_URL: &str = "https://docs.google.com/document/d/e/2PACX-1vQiVT_Jj04V35C-YRzvoqyEYYzdXHcRyMUZCVQRYCu6gQJX7hbNhJ5eFCMuoX47cAsDW2ZBYppUQITr/pub";

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Offline document, used when the published one cannot be fetched
pub const SAMPLE: &str = "H 0 0
E 1 0
L 2 0
L 3 0
O 4 0
W 0 1
O 1 1
R 2 1
L 3 1
D 4 1
";

/// What [SAMPLE] renders to
pub const SAMPLE_EXPECT: &str = "HELLO\nWORLD";
