//! Text field input handling utilities.

/// Common editing operations for single-line inputs.
pub struct TextField;

impl TextField {
    /// Delete the character before the cursor.
    #[inline]
    pub fn backspace(input: &mut String, cursor: &mut usize) {
        if *cursor > 0 {
            input.remove(*cursor - 1);
            *cursor -= 1;
        }
    }

    /// Delete the character at the cursor.
    #[inline]
    pub fn delete(input: &mut String, cursor: usize) {
        if cursor < input.len() {
            input.remove(cursor);
        }
    }

    #[inline]
    pub fn left(cursor: &mut usize) {
        if *cursor > 0 {
            *cursor -= 1;
        }
    }

    #[inline]
    pub fn right(input: &str, cursor: &mut usize) {
        if *cursor < input.len() {
            *cursor += 1;
        }
    }

    #[inline]
    pub fn home(cursor: &mut usize) {
        *cursor = 0;
    }

    #[inline]
    pub fn end(input: &str, cursor: &mut usize) {
        *cursor = input.len();
    }

    /// Insert a character at the cursor.
    #[inline]
    pub fn insert_char(input: &mut String, cursor: &mut usize, c: char) {
        input.insert(*cursor, c);
        *cursor += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backspace() {
        let mut input = "docs".to_string();
        let mut cursor = 3;
        TextField::backspace(&mut input, &mut cursor);
        assert_eq!(input, "dos");
        assert_eq!(cursor, 2);
    }

    #[test]
    fn test_backspace_at_start() {
        let mut input = "docs".to_string();
        let mut cursor = 0;
        TextField::backspace(&mut input, &mut cursor);
        assert_eq!(input, "docs");
        assert_eq!(cursor, 0);
    }

    #[test]
    fn test_insert_char() {
        let mut input = "dcs".to_string();
        let mut cursor = 1;
        TextField::insert_char(&mut input, &mut cursor, 'o');
        assert_eq!(input, "docs");
        assert_eq!(cursor, 2);
    }
}
