use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::Sender;
use crossterm::event::{self, Event, KeyEventKind, MouseEventKind};
use tokio::runtime::Runtime;
use tokio::sync::mpsc;
use tokio::time::{interval_at, sleep, Instant};
use tokio_util::sync::CancellationToken;

use crate::animate::{COUNTER_TICK, SCROLL_TICK};
use crate::config::Config;
use crate::content::Content;
use crate::document::ElementId;
use crate::page::{startup, update, Command, Message, PageController};
use crate::render::RenderState;
use crate::util::Throttler;
use crate::{flog_debug, flog_trace, Result};

const MAX_TIMER_MESSAGES: usize = 128;

/// Resize events arrive in bursts while a terminal is dragged; one relayout
/// per window is plenty. Scroll stays unthrottled.
const RESIZE_THROTTLE: Duration = Duration::from_millis(100);

/// Rows per mouse wheel notch.
const WHEEL_ROWS: i32 = 3;

pub struct LogicThread;

impl LogicThread {
    pub fn run(
        config: Config,
        content: Content,
        state_tx: Sender<RenderState>,
        shutdown: Arc<AtomicBool>,
    ) -> Result<()> {
        Runtime::new()?.block_on(Self::run_async(config, content, state_tx, shutdown))
    }

    async fn run_async(
        config: Config,
        content: Content,
        state_tx: Sender<RenderState>,
        shutdown: Arc<AtomicBool>,
    ) -> Result<()> {
        flog_debug!("LogicThread::run_async reduced_motion={}", config.reduced_motion);

        let mut page = PageController::new(&content, config);
        let (msg_tx, mut msg_rx) = mpsc::unbounded_channel::<Message>();
        let mut timers = Timers::new(msg_tx.clone());
        let mut resize_throttle = Throttler::new(RESIZE_THROTTLE);
        let mut pending_resize: Option<(u16, u16)> = None;

        // Pick up the real terminal size before the first layout pass.
        if let Ok(size) = crossterm::terminal::size() {
            page.viewport_cols = size.0;
            page.viewport_rows = size.1;
        }

        for cmd in startup(&mut page) {
            timers.execute(cmd);
        }
        send_state(&state_tx, &page);
        page.dirty = false;

        loop {
            if shutdown.load(Ordering::Relaxed) {
                break;
            }

            // Terminal input (priority)
            while event::poll(Duration::ZERO)? {
                let msg = match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => Some(Message::Key(key)),
                    Event::Mouse(mouse) => match mouse.kind {
                        MouseEventKind::ScrollDown => Some(Message::Wheel(WHEEL_ROWS)),
                        MouseEventKind::ScrollUp => Some(Message::Wheel(-WHEEL_ROWS)),
                        MouseEventKind::Down(_) => Some(Message::MouseDown),
                        _ => None,
                    },
                    Event::Resize(cols, rows) => {
                        if resize_throttle.allow() {
                            pending_resize = None;
                            Some(Message::Resize(cols, rows))
                        } else {
                            pending_resize = Some((cols, rows));
                            None
                        }
                    }
                    _ => None,
                };

                if let Some(msg) = msg {
                    for cmd in update(&mut page, msg) {
                        if timers.execute(cmd) {
                            return finish(&mut page, &mut timers, &shutdown);
                        }
                    }
                }
            }

            // Throttled trailing resize
            if let Some((cols, rows)) = pending_resize {
                if resize_throttle.allow() {
                    pending_resize = None;
                    for cmd in update(&mut page, Message::Resize(cols, rows)) {
                        if timers.execute(cmd) {
                            return finish(&mut page, &mut timers, &shutdown);
                        }
                    }
                }
            }

            // Timer messages (bounded)
            for _ in 0..MAX_TIMER_MESSAGES {
                let Ok(msg) = msg_rx.try_recv() else { break };
                for cmd in update(&mut page, msg) {
                    if timers.execute(cmd) {
                        return finish(&mut page, &mut timers, &shutdown);
                    }
                }
            }

            if page.dirty {
                send_state(&state_tx, &page);
                page.dirty = false;
            }

            tokio::time::sleep(Duration::from_micros(500)).await;
        }

        finish(&mut page, &mut timers, &shutdown)
    }
}

fn finish(
    page: &mut PageController,
    timers: &mut Timers,
    shutdown: &Arc<AtomicBool>,
) -> Result<()> {
    flog_debug!("LogicThread shutting down");
    shutdown.store(true, Ordering::Relaxed);
    timers.cancel_all();
    page.teardown();
    Ok(())
}

fn send_state(state_tx: &Sender<RenderState>, page: &PageController) {
    let _ = state_tx.try_send(page.snapshot());
}

/// Owns every running timer task. One-shots are fire-and-forget; repeating
/// tickers keep a CancellationToken so they can be stopped individually
/// and all together at teardown.
struct Timers {
    msg_tx: mpsc::UnboundedSender<Message>,
    counters: HashMap<ElementId, CancellationToken>,
    glide: Option<CancellationToken>,
}

impl Timers {
    fn new(msg_tx: mpsc::UnboundedSender<Message>) -> Self {
        Self {
            msg_tx,
            counters: HashMap::new(),
            glide: None,
        }
    }

    /// Execute one command. Returns true when the app should quit.
    fn execute(&mut self, cmd: Command) -> bool {
        match cmd {
            Command::ScheduleReveal { target, delay } => {
                flog_trace!("Command::ScheduleReveal {:?} in {:?}", target, delay);
                self.one_shot(delay, Message::RevealDue(target));
            }

            Command::ScheduleToastExit { id, delay } => {
                self.one_shot(delay, Message::ToastExpired(id));
            }

            Command::ScheduleToastRemoval { id, delay } => {
                self.one_shot(delay, Message::ToastRemoved(id));
            }

            Command::StartCounter { element } => {
                flog_trace!("Command::StartCounter {:?}", element);
                let token = self.ticker(COUNTER_TICK, move || Message::CounterTick(element));
                // A replaced ticker (shouldn't happen, but) dies with its token.
                if let Some(old) = self.counters.insert(element, token) {
                    old.cancel();
                }
            }

            Command::StopCounter { element } => {
                if let Some(token) = self.counters.remove(&element) {
                    token.cancel();
                }
            }

            Command::StartScrollGlide => {
                if self.glide.is_none() {
                    let token = self.ticker(SCROLL_TICK, || Message::ScrollFrame);
                    self.glide = Some(token);
                }
            }

            Command::StopScrollGlide => {
                if let Some(token) = self.glide.take() {
                    token.cancel();
                }
            }

            Command::Quit => {
                flog_debug!("Command::Quit");
                return true;
            }
        }

        false
    }

    /// Independent one-shot timer; each invocation is its own task.
    fn one_shot(&self, delay: Duration, msg: Message) {
        let tx = self.msg_tx.clone();
        tokio::spawn(async move {
            sleep(delay).await;
            let _ = tx.send(msg);
        });
    }

    /// Repeating ticker with its own cancellation token. The first tick
    /// fires one full period after start, like the page's interval timers.
    fn ticker(
        &self,
        period: Duration,
        msg: impl Fn() -> Message + Send + 'static,
    ) -> CancellationToken {
        let token = CancellationToken::new();
        let cancel = token.clone();
        let tx = self.msg_tx.clone();
        tokio::spawn(async move {
            let mut ticks = interval_at(Instant::now() + period, period);
            loop {
                tokio::select! {
                    _ = cancel.cancelled() => break,
                    _ = ticks.tick() => {
                        if tx.send(msg()).is_err() {
                            break;
                        }
                    }
                }
            }
        });
        token
    }

    fn cancel_all(&mut self) {
        for (_, token) in self.counters.drain() {
            token.cancel();
        }
        if let Some(token) = self.glide.take() {
            token.cancel();
        }
    }
}
