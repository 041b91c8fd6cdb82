impl<S, IN> TasbihApp<S, IN>
where
    S: KeyValueStore,
    IN: InputProvider,
{
    fn process_inputs(&mut self, now: Moment) {
        loop {
            match self.input.poll_event() {
                Ok(Some(event)) => self.dispatch(event, now),
                Ok(None) => break,
                Err(_) => {
                    warn!("input provider failed");
                    self.show_status(self.settings.language.pick("Input error", "ইনপুট ত্রুটি"), now);
                    break;
                }
            }
        }
    }

    /// Apply one intent immediately. Also used by hosts that deliver
    /// events outside the polled input provider.
    pub fn dispatch(&mut self, event: InputEvent, now: Moment) {
        debug!("input {event:?}");
        self.pending_redraw = true;

        match event {
            InputEvent::Tap => {
                if self.overlay.is_some() {
                    debug!("tap ignored under {:?}", self.overlay);
                    return;
                }
                let effects = self.tracker.tap(&now);
                self.run_effects(&effects, now);
            }
            InputEvent::Reset => {
                let effects = self.tracker.reset();
                self.run_effects(&effects, now);
            }
            InputEvent::Next => {
                self.banner = None;
                let effects = self.tracker.advance();
                self.run_effects(&effects, now);
            }
            InputEvent::SelectStep(index) => {
                let effects = self.tracker.select_step(index);
                self.run_effects(&effects, now);
            }
            InputEvent::SelectPackage(id) => self.select_package(&id, now),
            InputEvent::EditGoal(raw) => {
                let effects = self.tracker.edit_goal(&raw);
                self.run_effects(&effects, now);
                if self.overlay == Some(Overlay::GoalEditor) {
                    self.overlay = None;
                }
            }
            InputEvent::CreatePackage(draft) => self.create_package(&draft, now),
            InputEvent::ClearUserPackages => self.clear_user_packages(now),
            InputEvent::ToggleLanguage => self.set_language(self.settings.language.toggled(), now),
            InputEvent::ToggleDarkMode => {
                self.settings.dark_mode = !self.settings.dark_mode;
                self.settings.save_dark_mode(&mut self.store);
            }
            InputEvent::SetHaptic(kind, duration_ms) => self.set_haptic(kind, duration_ms),
            InputEvent::Open(overlay) => {
                if overlay == Overlay::Calendar {
                    self.calendar = Some(CalendarCursor::containing(now.today()));
                }
                self.overlay = Some(overlay);
            }
            InputEvent::Close => {
                self.overlay = None;
            }
            InputEvent::CalendarShift(offset) => {
                if let (Some(Overlay::Calendar), Some(cursor)) = (self.overlay, self.calendar) {
                    let (year, month) = calendar::shift_month(cursor.year, cursor.month, offset);
                    self.calendar = Some(CalendarCursor { year, month });
                }
            }
            InputEvent::CalendarToday => {
                if self.overlay == Some(Overlay::Calendar) {
                    self.calendar = Some(CalendarCursor::containing(now.today()));
                }
            }
            InputEvent::CopyDua(id, part) => self.copy_dua(id, part, now),
            InputEvent::ResetAppData => self.reset_app_data(),
            InputEvent::Quit => {
                self.quit_requested = true;
            }
        }
    }

    fn select_package(&mut self, id: &str, now: Moment) {
        let Some(package) = self.find_package(id) else {
            debug!("unknown package {id}");
            return;
        };
        self.banner = None;
        let effects = self.tracker.switch_package(&package);
        self.run_effects(&effects, now);
        if self.overlay == Some(Overlay::Packages) {
            self.overlay = None;
        }
    }

    fn set_language(&mut self, language: Language, now: Moment) {
        self.settings.language = language;
        self.settings.save_language(&mut self.store);
        self.quote = random_quote(language, &mut self.rng);
        let effects = self.tracker.relabel(language);
        self.run_effects(&effects, now);
        info!("language set to {}", language.as_str());
    }

    fn set_haptic(&mut self, kind: HapticKind, duration_ms: u32) {
        self.haptics.set(kind, duration_ms);
        self.haptics.save(&mut self.store);
    }

    fn copy_dua(&mut self, id: u16, part: DuaPart, now: Moment) {
        let language = self.settings.language;
        let Some(dua) = find_dua(language, id) else {
            debug!("unknown dua {id}");
            return;
        };
        let text = if self.caps.clipboard.copy(dua.part(part)) {
            language.pick("Copied", "কপি করা হয়েছে")
        } else {
            language.pick("Clipboard unavailable", "ক্লিপবোর্ড পাওয়া যায়নি")
        };
        self.show_status(text, now);
    }
}
