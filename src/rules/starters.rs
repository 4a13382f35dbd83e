/// Opening phrases and the interjection prepended to them, first match wins
pub const STARTERS: &[(&str, &str)] = &[
    ("hello", "Hark"),
    ("hey", "What ho"),
    ("greetings", "Well met"),
    ("welcome", "Well met"),
    ("well,", "Marry"),
    ("oh,", "O"),
    ("wow", "Zounds"),
    ("i cry thee mercy", "Alack"),
    ("prithee", "Good gentle"),
];
