//! Dashboard state: the rendered snapshot, coin selection and active view.
//!
//! `App` is owned by the main thread; the event loop feeds it snapshots and
//! key presses and the views in `ui` render from it. Selection is tracked by
//! `CoinId` rather than index so it survives snapshot replacement, with a
//! silent fallback to the first coin when the selected id is absent.

use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use monitor_core::coins::CoinId;
use monitor_core::format::Locale;
use monitor_core::quote::CoinQuote;

/// Tab shown in the lower half of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewTab {
    /// Detail line chart of the selected coin.
    Chart,
    /// Aggregate statistics of the selected coin.
    Stats,
    /// All coins overlaid on one chart.
    Compare,
}

impl ViewTab {
    /// All tabs in display order.
    pub const ALL: [ViewTab; 3] = [ViewTab::Chart, ViewTab::Stats, ViewTab::Compare];

    /// Title shown in the tab bar.
    pub fn title(&self) -> &'static str {
        match self {
            ViewTab::Chart => "Chart",
            ViewTab::Stats => "Stats",
            ViewTab::Compare => "Compare",
        }
    }

    /// Position within [`Self::ALL`], used by the tab widget.
    pub fn index(&self) -> usize {
        match self {
            ViewTab::Chart => 0,
            ViewTab::Stats => 1,
            ViewTab::Compare => 2,
        }
    }

    /// The tab after this one, wrapping around.
    pub fn next(&self) -> ViewTab {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }
}

/// Everything the views render from.
pub struct App {
    /// Latest snapshot received from the feed.
    pub quotes: Vec<CoinQuote>,
    /// Id of the coin driving the detail views.
    pub selected: CoinId,
    /// Active lower-half tab.
    pub view: ViewTab,
    /// Currency display convention.
    pub locale: Locale,
    /// Wall-clock time the latest snapshot arrived.
    pub last_update: Option<DateTime<Local>>,
    /// Set once the user asked to quit.
    pub should_quit: bool,
}

impl App {
    /// Create the app with an empty snapshot and `selected` preselected.
    pub fn new(selected: CoinId, locale: Locale) -> App {
        App {
            quotes: Vec::new(),
            selected,
            view: ViewTab::Chart,
            locale,
            last_update: None,
            should_quit: false,
        }
    }

    /// Replace the rendered snapshot and stamp the update time.
    pub fn apply_snapshot(&mut self, quotes: Vec<CoinQuote>) {
        self.quotes = quotes;
        self.last_update = Some(Local::now());
    }

    /// The quote driving the detail views.
    ///
    /// Falls back to the first quote when the selected id is not in the
    /// snapshot, so the detail views never go blank mid-session.
    pub fn selected_quote(&self) -> Option<&CoinQuote> {
        self.quotes
            .iter()
            .find(|quote| quote.id == self.selected)
            .or_else(|| self.quotes.first())
    }

    /// Position of the selected coin within the snapshot, after fallback.
    pub fn selected_index(&self) -> usize {
        self.quotes
            .iter()
            .position(|quote| quote.id == self.selected)
            .unwrap_or(0)
    }

    /// React to one key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.view = self.view.next(),
            KeyCode::Left => self.select_offset(-1),
            KeyCode::Right => self.select_offset(1),
            KeyCode::Char(digit @ '1'..='9') => {
                let index = digit as usize - '1' as usize;
                if let Some(quote) = self.quotes.get(index) {
                    self.selected = quote.id;
                }
            }
            _ => (),
        }
    }

    /// Move the selection left or right, wrapping around the card row.
    fn select_offset(&mut self, offset: isize) {
        let len = self.quotes.len();
        if len == 0 {
            return;
        }
        let current = self.selected_index() as isize;
        let next = (current + offset).rem_euclid(len as isize) as usize;
        self.selected = self.quotes[next].id;
    }
}
