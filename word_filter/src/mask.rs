pub const MASK: char = '#';

/// Replace every char strictly between the first and the last one with
/// `mask`. Strings of two chars or fewer come back unchanged.
pub fn mask_middle(s: &str, mask: char) -> String {
    let last = s.chars().count().saturating_sub(1);

    s.chars()
        .enumerate()
        .map(|(i, c)| if i == 0 || i == last { c } else { mask })
        .collect()
}
