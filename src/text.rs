//! String helpers

use crate::*;

pub trait Truncate {
    /// Truncate to at most `max_len` bytes.
    ///
    /// A cut that would split a character backs off to the preceding
    /// character boundary, so the result may be up to three bytes shorter.
    fn truncate_to(&self, max_len: isize) -> Result<&str, Error>;
}

impl Truncate for str {
    fn truncate_to(&self, max_len: isize) -> Result<&str, Error> {
        guard::non_negative(max_len as i64, "max_len")?;
        let max_len = max_len as usize;
        if max_len == 0 {
            return Ok("");
        }
        if self.len() <= max_len {
            return Ok(self);
        }
        let mut end = max_len;
        while !self.is_char_boundary(end) {
            end -= 1;
        }
        Ok(&self[..end])
    }
}

/// [`Truncate::truncate_to`] for a string that may be absent.
#[inline]
pub fn truncate_opt(s: Option<&str>, max_len: isize) -> Result<&str, Error> {
    guard::not_null(s, "str")?.truncate_to(max_len)
}
