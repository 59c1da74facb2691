use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::errors::FormError;

const MAX_TOASTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: Variant,
    pub created_at: Instant,
}

/// Short-lived notifications, newest last.
#[derive(Debug)]
pub struct Toasts {
    queue: VecDeque<Toast>,
    lifetime: Duration,
}

impl Toasts {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            queue: VecDeque::with_capacity(MAX_TOASTS),
            lifetime,
        }
    }

    pub fn push(&mut self, title: impl Into<String>, description: impl Into<String>) {
        self.push_toast(title.into(), description.into(), Variant::Default);
    }

    pub fn push_error(&mut self, error: &FormError) {
        self.push_toast(error.title(), error.description(), Variant::Destructive);
    }

    fn push_toast(&mut self, title: String, description: String, variant: Variant) {
        if self.queue.len() == MAX_TOASTS {
            self.queue.pop_front();
        }
        self.queue.push_back(Toast {
            title,
            description,
            variant,
            created_at: Instant::now(),
        });
    }

    pub fn prune(&mut self, now: Instant) {
        let lifetime = self.lifetime;
        self.queue
            .retain(|toast| now.saturating_duration_since(toast.created_at) < lifetime);
    }

    pub fn latest(&self) -> Option<&Toast> {
        self.queue.back()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_the_newest_three() {
        let mut toasts = Toasts::new(Duration::from_secs(4));
        for i in 0..5 {
            toasts.push(format!("title {i}"), "");
        }
        assert_eq!(toasts.len(), 3);
        assert_eq!(toasts.latest().unwrap().title, "title 4");
    }

    #[test]
    fn errors_are_destructive() {
        let mut toasts = Toasts::new(Duration::from_secs(4));
        toasts.push_error(&FormError::NoFriends);
        let toast = toasts.latest().unwrap();
        assert_eq!(toast.variant, Variant::Destructive);
        assert_eq!(toast.title, "No Friends Added");
        assert_eq!(toast.description, "Please add at least one friend");
    }

    #[test]
    fn prunes_expired_toasts() {
        let mut toasts = Toasts::new(Duration::from_secs(4));
        toasts.push("Payment Updated", "Marked Riya's payment as paid");
        let created = toasts.latest().unwrap().created_at;

        toasts.prune(created + Duration::from_secs(3));
        assert_eq!(toasts.len(), 1);
        toasts.prune(created + Duration::from_secs(4));
        assert!(toasts.is_empty());
        assert!(toasts.latest().is_none());
    }
}
