/// The whole list when `expanded`, otherwise its first `limit` items.
pub fn displayed<T>(list: &[T], expanded: bool, limit: usize) -> &[T] {
    if expanded {
        list
    } else {
        &list[..limit.min(list.len())]
    }
}

/// "Show more" state of one list section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginated {
    limit: usize,
    expanded: bool,
}

impl Paginated {
    pub const fn new(limit: usize) -> Self {
        Self {
            limit,
            expanded: false,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn collapse(&mut self) {
        self.expanded = false;
    }

    pub fn slice<'a, T>(&self, list: &'a [T]) -> &'a [T] {
        displayed(list, self.expanded, self.limit)
    }

    pub fn visible_len(&self, total: usize) -> usize {
        if self.expanded {
            total
        } else {
            self.limit.min(total)
        }
    }

    /// Whether a toggle would change what is shown.
    pub fn has_more(&self, total: usize) -> bool {
        total > self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapsed_shows_prefix() {
        let list = [1, 2, 3, 4, 5];
        assert_eq!(displayed(&list, false, 3), &[1, 2, 3]);
        assert_eq!(displayed(&list, true, 3), &list);
        assert_eq!(displayed(&list, false, 10), &list);
        assert_eq!(displayed::<i32>(&[], false, 4), &[] as &[i32]);
    }

    #[test]
    fn toggle_and_collapse() {
        let list = [1, 2, 3, 4, 5];
        let mut page = Paginated::new(4);
        assert_eq!(page.slice(&list).len(), 4);
        assert!(page.has_more(list.len()));

        page.toggle();
        assert!(page.is_expanded());
        assert_eq!(page.slice(&list).len(), 5);
        assert_eq!(page.visible_len(list.len()), 5);

        page.collapse();
        assert_eq!(page.visible_len(list.len()), 4);
        assert!(!Paginated::new(5).has_more(list.len()));
    }
}
