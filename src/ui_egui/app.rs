use super::add_entry::{render_add_entry, AddEntryAction, AddEntryForm};
use super::home::{render_home, HomeAction};
use super::theme::apply_theme;
use crate::models::booking::BookingEntry;
use crate::models::settings::Settings;
use crate::services::booking::{BookingStore, Subscription};
use chrono::{Local, NaiveDate};
use std::cell::RefCell;
use std::rc::Rc;

/// Which screen is on display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    AddEntry,
}

pub struct BookingApp {
    store: BookingStore,
    /// Latest list published by the store, read by the home screen
    entries: Rc<RefCell<Vec<BookingEntry>>>,
    subscription: Option<Subscription>,
    settings: Settings,
    screen: Screen,
    form: AddEntryForm,
}

impl eframe::App for BookingApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| match self.screen {
            Screen::Home => {
                let entries = Rc::clone(&self.entries);
                let action = render_home(ui, &entries.borrow(), &self.settings);
                self.handle_home_action(action);
            }
            Screen::AddEntry => {
                let action = render_add_entry(ui, &mut self.form, &self.settings);
                self.handle_add_action(action);
            }
        });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Some(subscription) = self.subscription.take() {
            self.store.unsubscribe(subscription);
        }
        log::info!("Exiting with {} booking(s) in memory", self.store.len());
    }
}

impl BookingApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        apply_theme(&cc.egui_ctx, &settings);
        Self::with_settings(settings, Local::now().date_naive())
    }

    /// Build the application state without a UI context
    pub fn with_settings(settings: Settings, today: NaiveDate) -> Self {
        let mut store = BookingStore::new();
        let entries = Rc::new(RefCell::new(store.current_entries().to_vec()));

        let snapshot = Rc::clone(&entries);
        let subscription = store.subscribe(move |current| {
            *snapshot.borrow_mut() = current.to_vec();
        });

        Self {
            store,
            entries,
            subscription: Some(subscription),
            settings,
            screen: Screen::Home,
            form: AddEntryForm::new(today),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn store(&self) -> &BookingStore {
        &self.store
    }

    pub fn form_mut(&mut self) -> &mut AddEntryForm {
        &mut self.form
    }

    /// Entries as last published to the view
    pub fn visible_entries(&self) -> Vec<BookingEntry> {
        self.entries.borrow().clone()
    }

    pub fn handle_home_action(&mut self, action: HomeAction) {
        match action {
            HomeAction::None => {}
            HomeAction::OpenAddScreen => {
                self.form.reset(Local::now().date_naive());
                self.screen = Screen::AddEntry;
            }
            HomeAction::Delete(entry) => {
                if self.store.delete(&entry) {
                    log::info!("Deleted booking for '{}'", entry.name());
                }
            }
        }
    }

    pub fn handle_add_action(&mut self, action: AddEntryAction) {
        match action {
            AddEntryAction::None => {}
            AddEntryAction::Saved(entry) => {
                log::info!("Added booking for '{}'", entry.name());
                self.store.add(entry);
                self.screen = Screen::Home;
            }
            AddEntryAction::Cancelled => {
                self.screen = Screen::Home;
            }
        }
    }
}
