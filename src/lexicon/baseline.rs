// The baseline Punjabi vocabulary.
//
// A hand-picked sample of common Gurmukhi words: pronouns, postpositions,
// everyday verbs and nouns, colors, numbers, and place names. It is small on
// purpose — anything outside it is reported as a candidate neologism.

pub const BASELINE_WORDS: &[&str] = &[
    "ਮੈਂ", "ਤੂੰ", "ਅਸੀਂ", "ਤੁਸੀਂ", "ਉਹ", "ਹਾਂ", "ਸੀ", "ਨੇ", "ਨੂੰ", "ਦਾ", "ਦੇ", "ਦੀ", "ਵਿੱਚ", "ਤੇ",
    "ਅਤੇ", "ਪਰ", "ਜਾਂ", "ਕਿਉਂਕਿ", "ਜਦੋਂ", "ਤਦ", "ਹੁਣ", "ਕੱਲ੍ਹ", "ਅੱਜ", "ਸਾਡਾ", "ਤੁਹਾਡਾ", "ਮੇਰਾ",
    "ਕੀ", "ਕਿਵੇਂ", "ਕਿੱਥੇ", "ਕੌਣ", "ਜਾ", "ਆ", "ਖਾ", "ਪੀ", "ਸੌਂ", "ਰਹਿ", "ਕਰ", "ਦੇਖ", "ਸੁਣ", "ਬੋਲ",
    "ਲਿਖ", "ਪੜ੍ਹ", "ਘਰ", "ਸਕੂਲ", "ਕੰਮ", "ਪਾਣੀ", "ਰੋਟੀ", "ਚਾਹ", "ਦੁੱਧ", "ਮਾਂ", "ਪਿਓ", "ਭਰਾ", "ਭੈਣ",
    "ਦੋਸਤ", "ਮਿੱਤਰ", "ਖੁਸ਼ੀ", "ਗ਼ਮ", "ਪਿਆਰ", "ਨਫ਼ਰਤ", "ਜ਼ਿੰਦਗੀ", "ਮੌਤ", "ਸੱਚ", "ਝੂਠ", "ਦਿਨ", "ਰਾਤ",
    "ਸਵੇਰ", "ਸ਼ਾਮ", "ਵਧੀਆ", "ਮਾੜਾ", "ਚੰਗਾ", "ਸੋਹਣਾ", "ਵੱਡਾ", "ਛੋਟਾ", "ਨਵਾਂ", "ਪੁਰਾਣਾ", "ਲਾਲ", "ਕਾਲਾ",
    "ਚਿੱਟਾ", "ਨੀਲਾ", "ਇੱਕ", "ਦੋ", "ਤਿੰਨ", "ਚਾਰ", "ਪੰਜ", "ਦਸ", "ਸੌ", "ਹਜ਼ਾਰ", "ਲੱਖ", "ਕਰੋੜ", "ਭਾਰਤ",
    "ਪੰਜਾਬ", "ਦੁਨੀਆ", "ਧਰਤੀ", "ਅਸਮਾਨ", "ਸੂਰਜ", "ਚੰਦ", "ਤਾਰੇ", "ਹਵਾ", "ਅੱਗ", "ਕਿਤਾਬ", "ਕਾਪੀ", "ਕਲਮ",
    "ਫੋਨ", "ਗੱਡੀ", "ਬੱਸ", "ਰੇਲ", "ਜਹਾਜ਼", "ਰਸਤਾ", "ਸ਼ਹਿਰ", "ਪਿੰਡ",
];
