/// Time-of-day salutation shown above the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Greeting {
    Morning,
    Afternoon,
    Evening,
}

impl Greeting {
    /// 5–11 morning, 12–17 afternoon, otherwise evening.
    pub fn for_hour(hour: u32) -> Self {
        match hour {
            5..=11 => Greeting::Morning,
            12..=17 => Greeting::Afternoon,
            _ => Greeting::Evening,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Greeting::Morning => "greeting-morning",
            Greeting::Afternoon => "greeting-afternoon",
            Greeting::Evening => "greeting-evening",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Greeting;

    #[test]
    fn boundaries() {
        assert_eq!(Greeting::for_hour(4), Greeting::Evening);
        assert_eq!(Greeting::for_hour(5), Greeting::Morning);
        assert_eq!(Greeting::for_hour(11), Greeting::Morning);
        assert_eq!(Greeting::for_hour(12), Greeting::Afternoon);
        assert_eq!(Greeting::for_hour(17), Greeting::Afternoon);
        assert_eq!(Greeting::for_hour(18), Greeting::Evening);
        assert_eq!(Greeting::for_hour(0), Greeting::Evening);
    }
}
