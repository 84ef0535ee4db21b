use crate::screens::screen::ScreenAsync;

/// The stack of open screens; the last one receives input.
pub struct App {
    screens: Vec<Box<dyn ScreenAsync>>,
}

impl App {
    pub fn new(root: Box<dyn ScreenAsync>) -> Self {
        Self {
            screens: vec![root],
        }
    }

    pub fn current_screen(&mut self) -> Option<&mut Box<dyn ScreenAsync>> {
        self.screens.last_mut()
    }

    pub fn push_screen(&mut self, screen: Box<dyn ScreenAsync>) {
        self.screens.push(screen);
    }

    /// Pops `count` screens, never the root one, and optionally refreshes
    /// the screen that becomes current.
    pub async fn pop_screen(&mut self, refresh: bool, count: Option<u8>) {
        let count = count.unwrap_or(0) as usize;
        if count == 0 {
            return;
        }
        let to_pop = count.min(self.screens.len().saturating_sub(1));
        for _ in 0..to_pop {
            self.screens.pop();
        }
        if refresh {
            if let Some(prev) = self.screens.last_mut() {
                prev.refresh_data().await;
            }
        }
    }
}
