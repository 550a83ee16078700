/// Reference 20x11 maze. Start at (1, 1), End at (18, 9).
pub const DEFAULT_LAYOUT: [&str; 11] = [
    "11111111111111111111",
    "1S000000011000000001",
    "10111011101111111001",
    "10001000000001100001",
    "11101011111001101111",
    "10000010001000000001",
    "10111010101111111001",
    "10000010100000001001",
    "11111011101110111001",
    "100000000010000000E1",
    "11111111111111111111",
];

pub fn default_layout() -> Vec<String> {
    DEFAULT_LAYOUT.iter().map(|row| row.to_string()).collect()
}
