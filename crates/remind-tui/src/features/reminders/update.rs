//! Reminders reducer.

use crossterm::event::{KeyCode, KeyEvent};
use remind_core::models::{GroupId, NewReminder, ReminderId};

use crate::effects::UiEffect;
use crate::events::RemindersUiEvent;
use crate::overlays::{ConfirmState, Overlay, ReminderFormState};
use crate::state::{AppState, Screen};

pub fn handle_key(app: &mut AppState, group_id: GroupId, key: KeyEvent) -> Vec<UiEffect> {
    let state = &mut app.reminders;
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.select_prev();
            vec![]
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.select_next();
            vec![]
        }
        KeyCode::Char(' ' | 'x') => toggle_selected(app, group_id),
        KeyCode::Char('n') if !state.loading => {
            app.overlay = Some(Overlay::ReminderForm(ReminderFormState::new(group_id)));
            vec![]
        }
        KeyCode::Char('d') => {
            if state.deleting.is_none()
                && let Some(reminder) = state.selected_reminder()
            {
                app.overlay = Some(Overlay::Confirm(ConfirmState::delete_reminder(
                    group_id, reminder,
                )));
            }
            vec![]
        }
        KeyCode::Char('r') => {
            if state.loading {
                return vec![];
            }
            app.navigate(Screen::Reminders { group_id })
        }
        KeyCode::Esc | KeyCode::Char('b') | KeyCode::Backspace => app.navigate(Screen::Groups),
        KeyCode::Char('L') => {
            app.reset_to_login();
            vec![UiEffect::ClearSession]
        }
        KeyCode::Char('q') => vec![UiEffect::Quit],
        _ => vec![],
    }
}

/// Sends the inverted completion flag for the selected reminder.
fn toggle_selected(app: &mut AppState, group_id: GroupId) -> Vec<UiEffect> {
    let state = &mut app.reminders;
    let Some(reminder) = state.selected_reminder() else {
        return vec![];
    };
    let id = reminder.id;
    let completed = !reminder.completed;
    if !state.toggling.insert(id) {
        return vec![];
    }
    vec![UiEffect::ToggleReminder {
        group_id,
        id,
        completed,
    }]
}

/// Submitted from the create-reminder form.
pub fn submit_create(group_id: GroupId, reminder: NewReminder) -> Vec<UiEffect> {
    vec![UiEffect::CreateReminder { group_id, reminder }]
}

/// Confirmed in the delete dialog.
pub fn confirm_delete(app: &mut AppState, group_id: GroupId, id: ReminderId) -> Vec<UiEffect> {
    app.reminders.deleting = Some(id);
    vec![UiEffect::DeleteReminder { group_id, id }]
}

pub fn handle_event(app: &mut AppState, event: RemindersUiEvent) -> Vec<UiEffect> {
    let group_id = match &event {
        RemindersUiEvent::Loaded { group_id, .. }
        | RemindersUiEvent::Created { group_id, .. }
        | RemindersUiEvent::Toggled { group_id, .. }
        | RemindersUiEvent::Deleted { group_id, .. } => *group_id,
    };
    if !app.is_on_reminders(group_id) {
        tracing::debug!(?event, "discarding reminders result, screen changed");
        return vec![];
    }

    match event {
        RemindersUiEvent::Loaded { result, .. } => {
            app.reminders.loading = false;
            match result {
                Ok((group, reminders)) => {
                    app.reminders.group = Some(group);
                    app.reminders.reminders = reminders;
                    app.reminders.clamp_selection();
                }
                Err(err) if err.is_unauthorized() => {}
                Err(err) => {
                    tracing::warn!(%group_id, error = %err, "failed to load reminders");
                    app.toast_error("Failed to fetch data");
                    return app.navigate(Screen::Groups);
                }
            }
        }
        RemindersUiEvent::Created { result, .. } => match result {
            Ok(reminder) => {
                if matches!(app.overlay, Some(Overlay::ReminderForm(_))) {
                    app.overlay = None;
                }
                let reminders = &mut app.reminders.reminders;
                app.reminders.selected = match reminders.iter().position(|r| r.id == reminder.id) {
                    Some(index) => {
                        reminders[index] = reminder;
                        index
                    }
                    None => {
                        reminders.insert(0, reminder);
                        0
                    }
                };
                app.toast_success("Reminder created successfully!");
            }
            Err(err) => {
                if let Some(Overlay::ReminderForm(form)) = &mut app.overlay {
                    form.submitting = false;
                }
                if !err.is_unauthorized() {
                    app.toast_error(err.user_message("Failed to create reminder"));
                }
            }
        },
        RemindersUiEvent::Toggled {
            id,
            completed,
            result,
            ..
        } => {
            app.reminders.toggling.remove(&id);
            match result {
                Ok(updated) => {
                    if let Some(slot) = app.reminders.reminders.iter_mut().find(|r| r.id == id) {
                        *slot = updated;
                    }
                    app.toast_success(if completed {
                        "Reminder completed!"
                    } else {
                        "Reminder marked as incomplete"
                    });
                }
                Err(err) if err.is_unauthorized() => {}
                Err(err) => app.toast_error(err.user_message("Failed to update reminder")),
            }
        }
        RemindersUiEvent::Deleted { id, result, .. } => {
            app.reminders.deleting = None;
            match result {
                Ok(()) => {
                    app.reminders.reminders.retain(|r| r.id != id);
                    app.reminders.clamp_selection();
                    app.toast_success("Reminder deleted successfully");
                }
                Err(err) if err.is_unauthorized() => {}
                Err(err) => app.toast_error(err.user_message("Failed to delete reminder")),
            }
        }
    }
    vec![]
}
