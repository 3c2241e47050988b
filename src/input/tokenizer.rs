/// Split one raw line into command words on runs of space and tab.
///
/// A word is a maximal run of characters that are neither space nor tab;
/// the delimiters themselves are discarded, so a blank or all-whitespace
/// line yields no words at all.
pub fn tokenize(line: &str) -> Vec<String> {
    line.split([' ', '\t'])
        .filter(|word| !word.is_empty())
        .map(str::to_owned)
        .collect()
}
