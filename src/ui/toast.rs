use crate::constant::MAX_VISIBLE_TOASTS;
use egui::{Align2, Color32, Context, Id, Order, RichText};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
    expires_at: Instant,
}

/// Short-lived notifications stacked in the bottom right corner
pub struct Toasts {
    queue: VecDeque<Toast>,
    lifetime: Duration,
}

impl Toasts {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            queue: VecDeque::new(),
            lifetime,
        }
    }

    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.push_at(level, message, Instant::now());
    }

    fn push_at(&mut self, level: ToastLevel, message: impl Into<String>, now: Instant) {
        self.queue.push_back(Toast {
            message: message.into(),
            level,
            expires_at: now + self.lifetime,
        });
        while self.queue.len() > MAX_VISIBLE_TOASTS {
            self.queue.pop_front();
        }
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ToastLevel::Success, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(ToastLevel::Error, message);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(ToastLevel::Info, message);
    }

    /// Drop expired toasts and return how long until the next one expires
    fn prune(&mut self, now: Instant) -> Option<Duration> {
        self.queue.retain(|toast| toast.expires_at > now);
        self.queue
            .iter()
            .map(|toast| toast.expires_at.saturating_duration_since(now))
            .min()
    }

    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.queue.iter()
    }

    pub fn show(&mut self, ctx: &Context) {
        let Some(next_expiry) = self.prune(Instant::now()) else {
            return;
        };

        egui::Area::new(Id::new("toasts"))
            .anchor(Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
            .order(Order::Foreground)
            .interactable(false)
            .show(ctx, |ui| {
                for toast in &self.queue {
                    let color = match toast.level {
                        ToastLevel::Success => Color32::from_rgb(22, 163, 74),
                        ToastLevel::Error => Color32::from_rgb(220, 38, 38),
                        ToastLevel::Info => ui.visuals().text_color(),
                    };
                    egui::Frame::popup(ui.style()).show(ui, |ui| {
                        ui.label(RichText::new(&toast.message).color(color));
                    });
                }
            });

        ctx.request_repaint_after(next_expiry);
    }
}
