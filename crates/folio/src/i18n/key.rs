use std::fmt;

/// A message id in the translation tables, e.g. `pub-title`.
#[derive(Eq, PartialEq, Clone, Copy, Debug, Hash)]
pub struct IntlKey<'a>(&'a str);

impl<'a> IntlKey<'a> {
    pub fn new(id: &'a str) -> Self {
        IntlKey(id)
    }

    pub fn as_str(&self) -> &'a str {
        self.0
    }
}

impl fmt::Display for IntlKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.0)
    }
}
