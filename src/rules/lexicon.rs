/// Single words and their archaic replacements, applied only to eligible parts of speech
pub const LEXICON: &[(&str, &[&str])] = &[
    ("you", &["thou"]),
    ("your", &["thy"]),
    ("yours", &["thine"]),
    ("yourself", &["thyself"]),
    ("are", &["art"]),
    ("has", &["hath"]),
    ("does", &["doth"]),
    ("goes", &["goeth"]),
    ("says", &["saith"]),
    ("knows", &["knoweth"]),
    ("makes", &["maketh"]),
    ("yes", &["aye", "yea"]),
    ("okay", &["very well"]),
    ("please", &["prithee"]),
    ("perhaps", &["perchance"]),
    ("maybe", &["mayhap"]),
    ("very", &["passing"]),
    ("really", &["verily"]),
    ("truly", &["verily"]),
    ("often", &["oft"]),
    ("soon", &["anon"]),
    ("again", &["anew"]),
    ("quickly", &["swiftly"]),
    ("why", &["wherefore"]),
    ("today", &["this day"]),
    ("tonight", &["this night"]),
    ("tomorrow", &["on the morrow"]),
    ("nothing", &["naught"]),
    ("anything", &["aught"]),
    ("everyone", &["all"]),
    ("everything", &["all"]),
    ("girl", &["lass"]),
    ("boy", &["lad"]),
    ("man", &["fellow"]),
    ("woman", &["gentlewoman"]),
    ("father", &["sire"]),
    ("enemy", &["foe"]),
    ("money", &["coin"]),
    ("food", &["victuals"]),
    ("help", &["aid"]),
    ("listen", &["hark"]),
    ("kill", &["slay"]),
    ("killed", &["slain"]),
    ("afraid", &["afeard"]),
    ("fear", &["dread"]),
    ("happy", &["merry"]),
    ("sad", &["woeful"]),
    ("beautiful", &["fair"]),
    ("pretty", &["comely"]),
    ("ugly", &["foul"]),
    ("crazy", &["mad"]),
    ("stupid", &["witless"]),
    ("idiot", &["knave"]),
];
