// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::{Focus, ScreenKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub active_screen: ScreenKind,
    pub focus: Focus,
    pub status_line: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            active_screen: ScreenKind::Maintenance,
            focus: Focus::List,
            status_line: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    NextScreen,
    PrevScreen,
    GoToScreen(ScreenKind),
    FocusSearch,
    FocusList,
    SetStatus(String),
    ClearStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    ScreenChanged(ScreenKind),
    FocusChanged(Focus),
    StatusUpdated(String),
    StatusCleared,
}

impl AppState {
    pub fn dispatch(&mut self, command: AppCommand) -> Vec<AppEvent> {
        match command {
            AppCommand::NextScreen => self.rotate_screen(1),
            AppCommand::PrevScreen => self.rotate_screen(-1),
            AppCommand::GoToScreen(screen) => {
                if screen == self.active_screen {
                    return Vec::new();
                }
                self.active_screen = screen;
                self.focus = Focus::List;
                vec![AppEvent::ScreenChanged(screen)]
            }
            AppCommand::FocusSearch => {
                self.focus = Focus::Search;
                vec![AppEvent::FocusChanged(self.focus)]
            }
            AppCommand::FocusList => {
                self.focus = Focus::List;
                vec![AppEvent::FocusChanged(self.focus)]
            }
            AppCommand::SetStatus(message) => vec![self.set_status(&message)],
            AppCommand::ClearStatus => {
                self.status_line = None;
                vec![AppEvent::StatusCleared]
            }
        }
    }

    fn rotate_screen(&mut self, delta: isize) -> Vec<AppEvent> {
        let screens = ScreenKind::ALL;
        let current = self.active_screen.position() as isize;
        let len = screens.len() as isize;
        let next = (current + delta).rem_euclid(len) as usize;
        self.active_screen = screens[next];
        self.focus = Focus::List;
        vec![AppEvent::ScreenChanged(self.active_screen)]
    }

    fn set_status(&mut self, message: &str) -> AppEvent {
        self.status_line = Some(message.to_owned());
        AppEvent::StatusUpdated(message.to_owned())
    }
}
