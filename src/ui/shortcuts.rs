use egui::{Context, Event, Key, Modifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    Compare,
    CopyInline,
    CopyJson,
}

/// A key chord. Ctrl (or Cmd) and Shift must match exactly: a chord that
/// does not ask for Shift will not fire while Shift is held.
#[derive(Debug, Clone, Copy)]
pub struct Shortcut {
    pub key: Key,
    pub command: bool,
    pub shift: bool,
    pub action: ShortcutAction,
}

pub const SHORTCUTS: &[Shortcut] = &[
    Shortcut {
        key: Key::Enter,
        command: true,
        shift: false,
        action: ShortcutAction::Compare,
    },
    Shortcut {
        key: Key::C,
        command: true,
        shift: true,
        action: ShortcutAction::CopyInline,
    },
    Shortcut {
        key: Key::J,
        command: true,
        shift: true,
        action: ShortcutAction::CopyJson,
    },
];

impl Shortcut {
    pub fn matches(&self, key: Key, modifiers: Modifiers) -> bool {
        key == self.key
            && command_held(modifiers) == self.command
            && modifiers.shift == self.shift
    }
}

fn command_held(modifiers: Modifiers) -> bool {
    modifiers.ctrl || modifiers.command || modifiers.mac_cmd
}

pub fn find_action(key: Key, modifiers: Modifiers) -> Option<ShortcutAction> {
    SHORTCUTS
        .iter()
        .find(|shortcut| shortcut.matches(key, modifiers))
        .map(|shortcut| shortcut.action)
}

/// The integration reports any Cmd/Ctrl+C chord as `Event::Copy` instead of a
/// key press, so the shifted variant has to be recovered from the modifiers.
fn event_action(event: &Event, frame_modifiers: Modifiers) -> Option<ShortcutAction> {
    match event {
        Event::Key {
            key,
            pressed: true,
            modifiers,
            ..
        } => find_action(*key, *modifiers),
        Event::Copy => find_action(Key::C, frame_modifiers),
        _ => None,
    }
}

/// Consume the first shortcut pressed this frame, so text fields never see it
pub fn take_action(ctx: &Context) -> Option<ShortcutAction> {
    ctx.input_mut(|input| {
        let frame_modifiers = input.modifiers;
        let mut action = None;
        input.events.retain(|event| {
            if action.is_some() {
                return true;
            }
            match event_action(event, frame_modifiers) {
                Some(found) => {
                    action = Some(found);
                    false
                }
                None => true,
            }
        });
        action
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_enter_compares() {
        assert_eq!(
            find_action(Key::Enter, Modifiers::CTRL),
            Some(ShortcutAction::Compare)
        );
        assert_eq!(
            find_action(Key::Enter, Modifiers::MAC_CMD),
            Some(ShortcutAction::Compare)
        );
    }

    #[test]
    fn test_modifiers_must_match_exactly() {
        assert_eq!(find_action(Key::Enter, Modifiers::NONE), None);
        assert_eq!(find_action(Key::Enter, Modifiers::CTRL | Modifiers::SHIFT), None);
        assert_eq!(find_action(Key::C, Modifiers::CTRL), None);
        assert_eq!(
            find_action(Key::C, Modifiers::CTRL | Modifiers::SHIFT),
            Some(ShortcutAction::CopyInline)
        );
        assert_eq!(
            find_action(Key::J, Modifiers::COMMAND | Modifiers::SHIFT),
            Some(ShortcutAction::CopyJson)
        );
    }

    fn run_frame(
        events: Vec<Event>,
        modifiers: Modifiers,
    ) -> (Option<ShortcutAction>, Vec<Event>) {
        let ctx = Context::default();
        let input = egui::RawInput {
            events,
            modifiers,
            ..Default::default()
        };
        let mut action = None;
        let mut remaining = Vec::new();
        let _ = ctx.run(input, |ctx| {
            action = take_action(ctx);
            remaining = ctx.input(|i| i.events.clone());
        });
        (action, remaining)
    }

    #[test]
    fn test_shifted_copy_event_copies_inline() {
        let (action, remaining) =
            run_frame(vec![Event::Copy], Modifiers::CTRL | Modifiers::SHIFT);
        assert_eq!(action, Some(ShortcutAction::CopyInline));
        assert!(!remaining.contains(&Event::Copy));

        let (action, _) = run_frame(
            vec![Event::Copy],
            Modifiers::MAC_CMD | Modifiers::COMMAND | Modifiers::SHIFT,
        );
        assert_eq!(action, Some(ShortcutAction::CopyInline));
    }

    #[test]
    fn test_plain_copy_is_left_for_text_fields() {
        let (action, remaining) = run_frame(vec![Event::Copy], Modifiers::CTRL);
        assert_eq!(action, None);
        assert!(remaining.contains(&Event::Copy));
    }

    #[test]
    fn test_key_chords_are_consumed_from_the_frame() {
        let key_event = |key| Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: Modifiers::CTRL | Modifiers::SHIFT,
        };
        let (action, remaining) =
            run_frame(vec![key_event(Key::J)], Modifiers::CTRL | Modifiers::SHIFT);
        assert_eq!(action, Some(ShortcutAction::CopyJson));
        assert!(!remaining.iter().any(|e| matches!(e, Event::Key { .. })));
    }
}
