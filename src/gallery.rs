use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortfolioItem {
    pub id: u32,
    pub src: &'static str,
    pub alt: &'static str,
    pub category: &'static str,
    pub caption: &'static str,
}

pub const PORTFOLIO: [PortfolioItem; 6] = [
    PortfolioItem {
        id: 1,
        src: "/assets/portfolio/wedding-1.jpg",
        alt: "Beautiful wedding photography of bride and groom in elegant outdoor setting",
        category: "Wedding",
        caption: "Sarah & Michael - Garden Wedding",
    },
    PortfolioItem {
        id: 2,
        src: "/assets/portfolio/portrait-1.jpg",
        alt: "Professional portrait photography of woman in natural lighting",
        category: "Portrait",
        caption: "Professional Headshot Session",
    },
    PortfolioItem {
        id: 3,
        src: "/assets/portfolio/family-1.jpg",
        alt: "Happy family of four during golden hour outdoor photography session",
        category: "Family",
        caption: "The Johnson Family",
    },
    PortfolioItem {
        id: 4,
        src: "/assets/portfolio/landscape-1.jpg",
        alt: "Stunning landscape photography with mountains and golden hour lighting",
        category: "Landscape",
        caption: "Mountain Serenity",
    },
    PortfolioItem {
        id: 5,
        src: "/assets/portfolio/maternity-1.jpg",
        alt: "Elegant maternity photography session with expecting mother",
        category: "Maternity",
        caption: "Expecting Joy",
    },
    PortfolioItem {
        id: 6,
        src: "/assets/portfolio/event-1.jpg",
        alt: "Professional event photography capturing celebration moments",
        category: "Event",
        caption: "Corporate Celebration",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Escape,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom(key: &str) -> Self {
        match key {
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            "Escape" => Key::Escape,
            _ => Key::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxState {
    Closed,
    Open(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("image index {index} out of range (0..{len})")]
pub struct OutOfRange {
    pub index: usize,
    pub len: usize,
}

/// Full-screen viewer cycling through a fixed list of images.
#[derive(Debug)]
pub struct Lightbox<'a, T> {
    items: &'a [T],
    state: LightboxState,
}

impl<'a, T> Lightbox<'a, T> {
    pub fn new(items: &'a [T]) -> Self {
        Self {
            items,
            state: LightboxState::Closed,
        }
    }

    pub fn state(&self) -> LightboxState {
        self.state
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn current(&self) -> Option<&'a T> {
        match self.state {
            LightboxState::Open(i) => self.items.get(i),
            LightboxState::Closed => None,
        }
    }

    pub fn open(&mut self, index: usize) -> Result<(), OutOfRange> {
        if index >= self.items.len() {
            return Err(OutOfRange {
                index,
                len: self.items.len(),
            });
        }
        self.state = LightboxState::Open(index);
        Ok(())
    }

    pub fn close(&mut self) {
        self.state = LightboxState::Closed;
    }

    pub fn next(&mut self) {
        if let Some(i) = self.peek_next() {
            self.state = LightboxState::Open(i);
        }
    }

    pub fn prev(&mut self) {
        if let Some(i) = self.peek_prev() {
            self.state = LightboxState::Open(i);
        }
    }

    /// Keyboard bindings only apply while open.
    pub fn handle_key(&mut self, key: Key) {
        if self.state == LightboxState::Closed {
            return;
        }
        match key {
            Key::ArrowLeft => self.prev(),
            Key::ArrowRight => self.next(),
            Key::Escape => self.close(),
            Key::Other => {}
        }
    }

    /// Index `next()` would move to, without moving.
    pub fn peek_next(&self) -> Option<usize> {
        match self.state {
            LightboxState::Open(i) => Some((i + 1) % self.items.len()),
            LightboxState::Closed => None,
        }
    }

    /// Index `prev()` would move to, without moving.
    pub fn peek_prev(&self) -> Option<usize> {
        match self.state {
            LightboxState::Open(i) => {
                let n = self.items.len();
                Some((i + n - 1) % n)
            }
            LightboxState::Closed => None,
        }
    }
}
