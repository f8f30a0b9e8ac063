//! Interactive terminal front end
//!
//! Drives the navigator from line-based input: splash, home menu, list
//! screens, back navigation and hand-offs from cards.

use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info};

use crate::Result;
use crate::config::TimingConfig;
use crate::handoff::{Launcher, Platform};
use crate::navigation::{Navigator, Route};
use crate::screens::{AnyListScreen, HomeMenu, SplashScreen};
use crate::store::CollectionSource;
use crate::view::ScreenView;
use crate::weather::{WeatherBadge, WeatherSource};

const HOME_HELP: &str = "Pick a number, or q to quit.";
const LIST_HELP: &str = "m <n>: navigate, c <n>: call, r: refresh view, b: back, q: quit";

/// Screen currently shown on a list route
struct Mounted {
    screen: AnyListScreen,
    badge: WeatherBadge,
    screen_live: bool,
    badge_live: bool,
}

impl Mounted {
    fn new(screen: AnyListScreen, badge: WeatherBadge) -> Self {
        Self {
            screen,
            badge,
            screen_live: true,
            badge_live: true,
        }
    }

    fn view(&self) -> ScreenView {
        self.screen.view(self.badge.state())
    }

    /// Resolves when the records or the badge changed; never once both are final.
    async fn changed(&mut self) -> bool {
        let (from_screen, live) = tokio::select! {
            live = self.screen.changed(), if self.screen_live => (true, live),
            live = self.badge.changed(), if self.badge_live => (false, live),
            else => std::future::pending().await,
        };
        if from_screen {
            self.screen_live = live;
        } else {
            self.badge_live = live;
        }
        live
    }
}

async fn next_change(mounted: &mut Option<Mounted>) -> bool {
    match mounted {
        Some(current) => current.changed().await,
        None => std::future::pending().await,
    }
}

enum Event {
    Line(Option<String>),
    Changed(bool),
}

enum Action {
    Navigate(usize),
    Call(usize),
}

pub struct Shell<W: Write> {
    source: Arc<dyn CollectionSource>,
    weather: Arc<dyn WeatherSource>,
    launcher: Arc<dyn Launcher>,
    platform: Platform,
    timing: TimingConfig,
    menu: HomeMenu,
    out: W,
}

impl<W: Write> Shell<W> {
    pub fn new(
        source: Arc<dyn CollectionSource>,
        weather: Arc<dyn WeatherSource>,
        launcher: Arc<dyn Launcher>,
        platform: Platform,
        timing: TimingConfig,
        out: W,
    ) -> Self {
        Self {
            source,
            weather,
            launcher,
            platform,
            timing,
            menu: HomeMenu::default(),
            out,
        }
    }

    /// Give back the output writer
    pub fn into_output(self) -> W {
        self.out
    }

    /// Run until `q` or end of input.
    pub async fn run<R: AsyncBufRead + Unpin>(&mut self, input: R) -> Result<()> {
        let mut navigator = Navigator::default();
        let mut mounted: Option<Mounted> = None;

        let splash = SplashScreen::default();
        write!(self.out, "{splash}")?;
        self.out.flush()?;
        splash.run(&mut navigator, self.timing.splash_delay()).await;
        self.show_home()?;

        let mut lines = input.lines();
        loop {
            // input stays live while the mounted screen is still loading
            let event = tokio::select! {
                line = lines.next_line() => Event::Line(line?),
                rerender = next_change(&mut mounted) => Event::Changed(rerender),
            };
            let line = match event {
                Event::Line(Some(line)) => line,
                Event::Line(None) => break,
                Event::Changed(rerender) => {
                    if let (true, Some(current)) = (rerender, &mounted) {
                        write!(self.out, "{}", current.view())?;
                        self.out.flush()?;
                    }
                    continue;
                }
            };
            let command = line.trim();
            if command.is_empty() {
                continue;
            }
            if command == "q" {
                break;
            }
            debug!("Shell command '{}' on {}", command, navigator.current());

            match navigator.current() {
                Route::List(_) => match command {
                    "b" => {
                        if let Some(current) = mounted.take() {
                            current.screen.unmount();
                        }
                        navigator.back();
                        self.show_home()?;
                    }
                    "r" => {
                        if let Some(current) = &mounted {
                            write!(self.out, "{}", current.view())?;
                        }
                    }
                    other => match parse_action(other) {
                        Some(action) => {
                            if let Some(current) = &mounted {
                                self.hand_off(current, action)?;
                            }
                        }
                        None => writeln!(self.out, "{LIST_HELP}")?,
                    },
                },
                _ => match command.parse::<usize>().ok().and_then(|n| self.menu.select(n)) {
                    Some(Route::List(category)) => {
                        navigator.push(Route::List(category));
                        let current = Mounted::new(
                            AnyListScreen::mount(category, self.source.clone(), self.platform),
                            WeatherBadge::mount(self.weather.clone(), self.timing.weather_delay()),
                        );
                        // header and empty body right away; updates are drawn as they land
                        write!(self.out, "{}", current.view())?;
                        writeln!(self.out, "{LIST_HELP}")?;
                        mounted = Some(current);
                    }
                    _ => writeln!(self.out, "{HOME_HELP}")?,
                },
            }
            self.out.flush()?;
        }

        info!("Shell closed on {}", navigator.current());
        Ok(())
    }

    fn show_home(&mut self) -> Result<()> {
        write!(self.out, "{}", self.menu)?;
        writeln!(self.out, "{HOME_HELP}")?;
        Ok(())
    }

    fn hand_off(&mut self, mounted: &Mounted, action: Action) -> Result<()> {
        let view = mounted.view();
        let index = match action {
            Action::Navigate(n) | Action::Call(n) => n,
        };
        let Some(card) = index.checked_sub(1).and_then(|i| view.cards.get(i)) else {
            writeln!(self.out, "No card {index}")?;
            return Ok(());
        };

        match action {
            Action::Navigate(_) => {
                if card.navigate(self.launcher.as_ref()) {
                    writeln!(self.out, "Opening map for {}", card.title)?;
                } else {
                    writeln!(self.out, "{} has no map", card.title)?;
                }
            }
            Action::Call(_) => {
                if card.call(self.launcher.as_ref()) {
                    writeln!(self.out, "Calling {}", card.title)?;
                } else {
                    writeln!(self.out, "{} has no phone number", card.title)?;
                }
            }
        }
        Ok(())
    }
}

fn parse_action(command: &str) -> Option<Action> {
    let (verb, arg) = command.split_once(' ')?;
    let n = arg.trim().parse().ok()?;
    match verb {
        "m" => Some(Action::Navigate(n)),
        "c" => Some(Action::Call(n)),
        _ => None,
    }
}
