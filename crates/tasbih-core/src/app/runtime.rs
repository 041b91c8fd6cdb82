impl<S, IN> TasbihApp<S, IN>
where
    S: KeyValueStore,
    IN: InputProvider,
{
    fn start(&mut self, now: Moment) {
        self.started = true;
        self.today = Some(now.today());
        self.refresh_at = calendar::next_midnight(now.local);
        self.reminder.start(now.monotonic_ms, self.caps.notifier.as_mut());
    }

    fn run_effects(&mut self, effects: &Effects, now: Moment) {
        for effect in effects {
            match *effect {
                Effect::Persist(key) => {
                    self.tracker.persist(key, &mut self.store);
                }
                Effect::Vibrate(cue) => {
                    let pattern = cue.pattern(&self.haptics);
                    if !pattern.is_empty() {
                        self.caps.haptics.vibrate(&pattern);
                    }
                }
                Effect::Celebrate => {
                    let text = random_motivation(self.settings.language, &mut self.rng);
                    self.banner = Some(Banner {
                        text,
                        until_ms: now.monotonic_ms + BANNER_VISIBLE_MS,
                    });
                }
            }
        }
    }

    fn show_status(&mut self, text: &'static str, now: Moment) {
        self.status = Some(StatusLine {
            text,
            until_ms: now.monotonic_ms + STATUS_VISIBLE_MS,
        });
        self.pending_redraw = true;
    }

    fn expire_messages(&mut self, now_ms: u64) {
        if self.banner.is_some_and(|banner| now_ms >= banner.until_ms) {
            self.banner = None;
            self.pending_redraw = true;
        }
        if self.status.is_some_and(|status| now_ms >= status.until_ms) {
            self.status = None;
            self.pending_redraw = true;
        }
    }

    /// Date labels and the "today" key roll over at local midnight.
    fn refresh_dates(&mut self, now: Moment) {
        let Some(refresh_at) = self.refresh_at else {
            return;
        };
        if now.local < refresh_at {
            return;
        }
        debug!("date rollover to {}", now.today());
        self.today = Some(now.today());
        self.refresh_at = calendar::next_midnight(now.local);
        self.pending_redraw = true;
    }

    fn poll_reminder(&mut self, now: Moment) {
        let outcome = self
            .reminder
            .poll(&now, &mut self.store, self.caps.notifier.as_mut());
        if outcome == ReminderOutcome::Delivered {
            info!("daily reminder delivered");
        }
    }

    fn create_package(&mut self, draft: &PackageDraft, now: Moment) {
        let mut created_at = now.local.and_utc().timestamp_millis();
        while self
            .user_packages
            .iter()
            .any(|package| package.id == user_package_id(created_at))
        {
            created_at += 1;
        }

        let Some(package) = draft.build(user_package_id(created_at)) else {
            debug!("discarding incomplete package draft");
            return;
        };
        info!(
            "created package {} with {} steps",
            package.id,
            package.cycles.len()
        );
        self.user_packages.push(package);
        save_user_packages(&mut self.store, &self.user_packages);

        let mut effects = Effects::new();
        let _ = effects.push(Effect::Vibrate(HapticCue::Undo));
        self.run_effects(&effects, now);
        let language = self.settings.language;
        self.show_status(language.pick("Package created", "প্যাকেজ তৈরি হয়েছে"), now);
    }

    /// Drop every user package. An active user package falls back to the
    /// first built-in one.
    pub fn clear_user_packages(&mut self, now: Moment) {
        if self.user_packages.is_empty() {
            return;
        }
        info!("clearing {} user packages", self.user_packages.len());
        self.user_packages.clear();
        save_user_packages(&mut self.store, &self.user_packages);

        if is_user_package_id(self.tracker.package_id()) {
            let fallback = content::default_package(self.settings.language);
            let effects = self.tracker.switch_package(&fallback);
            self.run_effects(&effects, now);
        }
    }

    /// Wipe the store and return to first-launch state.
    pub fn reset_app_data(&mut self) {
        if let Err(err) = self.store.clear() {
            warn!("could not clear store: {err:?}");
        }
        self.settings = AppSettings::default();
        self.haptics = HapticProfile::default();
        self.user_packages.clear();
        self.tracker =
            Tracker::new(self.settings.language, DailyStats::new()).with_retention(self.config.retention);
        self.quote = random_quote(self.settings.language, &mut self.rng);
        self.overlay = None;
        self.banner = None;
        self.status = None;
        self.pending_redraw = true;
        info!("app data reset");
    }

    /// Stop background work. The app keeps serving the counter but the
    /// reminder never fires again.
    pub fn shutdown(&mut self) {
        self.reminder.cancel();
        info!("tasbih app shut down");
    }

    pub fn should_quit(&self) -> bool {
        self.quit_requested
    }

    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }

    pub fn settings(&self) -> AppSettings {
        self.settings
    }

    pub fn haptic_profile(&self) -> HapticProfile {
        self.haptics
    }

    pub fn user_packages(&self) -> &[Package] {
        &self.user_packages
    }

    pub fn overlay(&self) -> Option<Overlay> {
        self.overlay
    }

    pub fn banner(&self) -> Option<&'static str> {
        self.banner.map(|banner| banner.text)
    }

    pub fn status(&self) -> Option<&'static str> {
        self.status.map(|status| status.text)
    }

    pub fn language(&self) -> Language {
        self.settings.language
    }

    pub fn reminder_active(&self) -> bool {
        self.reminder.is_active()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn input_mut(&mut self) -> &mut IN {
        &mut self.input
    }
}
