use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").expect("valid regex");
    static ref STOPWORDS: HashSet<&'static str> = {
        let words: &[&str] = &[
            "a","about","above","across","after","afterwards","again","against","all","almost","alone",
            "along","already","also","although","always","am","among","amongst","amoungst","amount","an",
            "and","another","any","anyhow","anyone","anything","anyway","anywhere","are","around","as","at",
            "back","be","became","because","become","becomes","becoming","been","before","beforehand",
            "behind","being","below","beside","besides","between","beyond","bill","both","bottom","but","by",
            "call","can","cannot","cant","co","con","could","couldnt","cry",
            "de","describe","detail","do","done","down","due","during",
            "each","eg","eight","either","eleven","else","elsewhere","empty","enough","etc","even","ever",
            "every","everyone","everything","everywhere","except",
            "few","fifteen","fify","fill","find","fire","first","five","for","former","formerly","forty",
            "found","four","from","front","full","further",
            "get","give","go",
            "had","has","hasnt","have","he","hence","her","here","hereafter","hereby","herein","hereupon",
            "hers","herself","him","himself","his","how","however","hundred",
            "ie","if","in","inc","indeed","interest","into","is","it","its","itself",
            "keep",
            "last","latter","latterly","least","less","ltd",
            "made","many","may","me","meanwhile","might","mill","mine","more","moreover","most","mostly",
            "move","much","must","my","myself",
            "name","namely","neither","never","nevertheless","next","nine","no","nobody","none","noone","nor",
            "not","nothing","now","nowhere",
            "of","off","often","on","once","one","only","onto","or","other","others","otherwise","our","ours",
            "ourselves","out","over","own",
            "part","per","perhaps","please","put",
            "rather","re",
            "same","see","seem","seemed","seeming","seems","serious","several","she","should","show","side",
            "since","sincere","six","sixty","so","some","somehow","someone","something","sometime",
            "sometimes","somewhere","still","such","system",
            "take","ten","than","that","the","their","them","themselves","then","thence","there","thereafter",
            "thereby","therefore","therein","thereupon","these","they","thickv","thin","third","this","those",
            "though","three","through","throughout","thru","thus","to","together","too","top","toward",
            "towards","twelve","twenty","two",
            "un","under","until","up","upon","us",
            "very","via",
            "was","we","well","were","what","whatever","when","whence","whenever","where","whereafter",
            "whereas","whereby","wherein","whereupon","wherever","whether","which","while","whither","who",
            "whoever","whole","whom","whose","why","will","with","within","without","would",
            "yet","you","your","yours","yourself","yourselves",
        ];
        words.iter().copied().collect()
    };
}

pub fn is_stop_word(token: &str) -> bool { STOPWORDS.contains(token) }

/// The read-only stop-word set consulted by word counting.
pub fn stop_words() -> &'static HashSet<&'static str> { &STOPWORDS }

/// Lower-case `text` and split it on runs of whitespace.
///
/// Leading, trailing and repeated whitespace never yields an empty token.
/// Punctuation stays attached to its token and no Unicode normalization is
/// applied, so two tokens are equal only when their lower-cased bytes are.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WHITESPACE
        .split(&lowered)
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_tokenize() {
        let t = tokenize("  The quick\tbrown\n\nFOX  ");
        assert_eq!(t, vec!["the", "quick", "brown", "fox"]);
    }

    #[test]
    fn empty_and_blank_text() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \t\r\n ").is_empty());
    }

    #[test]
    fn stop_word_lookup() {
        assert!(is_stop_word("the"));
        assert!(is_stop_word("amoungst"));
        assert!(!is_stop_word("The"));
        assert!(!is_stop_word("fox"));
        assert!(stop_words().len() > 300);
    }
}
