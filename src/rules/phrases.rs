/// Multi-word modern phrases and their archaic renderings.
///
/// Matching is longest key first, so an entry may safely contain a shorter one.
pub const PHRASES: &[(&str, &[&str])] = &[
    ("good morning", &["good morrow"]),
    ("good afternoon", &["good den"]),
    ("good evening", &["good even"]),
    ("goodbye", &["farewell", "adieu"]),
    ("good bye", &["farewell"]),
    ("how are you", &["how dost thou fare"]),
    ("thank you very much", &["I thank thee most kindly"]),
    ("thank you", &["I thank thee", "gramercy"]),
    ("thanks", &["gramercy"]),
    ("my friend", &["mine own friend"]),
    ("my friends", &["mine own friends"]),
    ("excuse me", &["pardon me"]),
    ("i am sorry", &["I cry thee mercy"]),
    ("i think", &["methinks"]),
    ("it seems", &["methinks"]),
    ("i do not know", &["I know not"]),
    ("i do not understand", &["I understand not"]),
    ("do not worry", &["fret not"]),
    ("of course", &["forsooth", "marry"]),
    ("i love you", &["I do love thee"]),
    ("you are", &["thou art"]),
    ("are you", &["art thou"]),
    ("do you", &["dost thou"]),
    ("did you", &["didst thou"]),
    ("have you", &["hast thou"]),
    ("will you", &["wilt thou"]),
    ("can you", &["canst thou"]),
    ("would you", &["wouldst thou"]),
    ("should you", &["shouldst thou"]),
    ("where are you going", &["whither goest thou"]),
    ("what are you doing", &["what dost thou"]),
    ("listen to me", &["hark unto me"]),
    ("come here", &["come hither"]),
    ("go away", &["begone", "get thee hence"]),
    ("over there", &["yonder"]),
    ("right now", &["anon"]),
    ("a lot", &["a great deal"]),
    ("be quiet", &["peace"]),
    ("let us go", &["let us hence"]),
    ("it is", &["'tis"]),
    ("it was", &["'twas"]),
];
