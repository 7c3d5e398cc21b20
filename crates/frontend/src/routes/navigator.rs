use super::route::Page;

/// Capability to change the current page. Pages and links receive it as a prop
/// instead of reaching for a global.
pub trait Navigator {
    fn navigate(&self, page: Page, slug: Option<String>);

    fn go(&self, page: Page) {
        self.navigate(page, None);
    }

    fn open_service(&self, slug: &str) {
        self.navigate(Page::Service, Some(slug.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        calls: RefCell<Vec<(Page, Option<String>)>>,
    }

    impl Navigator for Recorder {
        fn navigate(&self, page: Page, slug: Option<String>) {
            self.calls.borrow_mut().push((page, slug));
        }
    }

    #[test]
    fn test_helpers_forward_to_navigate() {
        let nav = Recorder::default();
        nav.go(Page::About);
        nav.open_service("ai-chatbots");

        assert_eq!(
            *nav.calls.borrow(),
            vec![
                (Page::About, None),
                (Page::Service, Some("ai-chatbots".to_string())),
            ]
        );
    }
}
