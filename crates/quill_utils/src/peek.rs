/// An iterator that can look at its next item without consuming it.
pub trait Peek: Iterator {
    fn peek(&self) -> Option<Self::Item>;

    fn eat<P>(&mut self, pat: P) -> bool
    where
        Self::Item: PartialEq<P>,
    {
        match self.peek() {
            Some(item) if item == pat => {
                self.next();
                true
            }
            _ => false,
        }
    }

    /// Consume items while `pred` holds, returning how many were eaten.
    fn eat_while(&mut self, mut pred: impl FnMut(&Self::Item) -> bool) -> usize {
        let mut count = 0;
        while matches!(self.peek(), Some(item) if pred(&item)) {
            self.next();
            count += 1;
        }
        count
    }

    fn at_end(&self) -> bool {
        self.peek().is_none()
    }
}

impl<P: Peek> Peek for &mut P {
    fn peek(&self) -> Option<Self::Item> {
        (**self).peek()
    }
}

impl Peek for std::str::Chars<'_> {
    fn peek(&self) -> Option<Self::Item> {
        self.clone().next()
    }
}

#[cfg(test)]
mod tests {
    use super::Peek;

    #[test]
    fn eat_matching() {
        let mut chars = "ab".chars();
        assert!(!chars.eat('b'));
        assert!(chars.eat('a'));
        assert_eq!(chars.peek(), Some('b'));
    }

    #[test]
    fn eat_while_counts() {
        let mut chars = "123abc".chars();
        assert_eq!(chars.eat_while(char::is_ascii_digit), 3);
        assert_eq!(chars.as_str(), "abc");
        assert_eq!(chars.eat_while(char::is_ascii_digit), 0);
    }

    #[test]
    fn at_end() {
        let mut chars = "x".chars();
        assert!(!chars.at_end());
        chars.next();
        assert!(chars.at_end());
    }
}
