impl<S, IN> TasbihApp<S, IN>
where
    S: KeyValueStore,
    IN: InputProvider,
{
    pub fn new(store: S, input: IN, caps: Capabilities, config: AppConfig) -> Self {
        let settings = AppSettings::load(&store);
        let haptics = HapticProfile::load(&store);
        let user_packages = load_user_packages(&store);
        let tracker = Tracker::restore(
            PersistedProgress::load(&store),
            DailyStats::load(&store),
            settings.language,
            &user_packages,
        )
        .with_retention(config.retention);

        let mut rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let quote = random_quote(settings.language, &mut rng);

        info!(
            "restored package {} step {} count {} ({} user packages)",
            tracker.package_id(),
            tracker.index(),
            tracker.count(),
            user_packages.len()
        );

        Self {
            store,
            input,
            caps,
            config,
            settings,
            haptics,
            tracker,
            user_packages,
            reminder: ReminderScheduler::new(),
            rng,
            quote,
            overlay: None,
            banner: None,
            status: None,
            calendar: None,
            today: None,
            refresh_at: None,
            started: false,
            pending_redraw: true,
            quit_requested: false,
        }
    }

    pub fn tick(&mut self, now: Moment) -> TickResult {
        if !self.started {
            self.start(now);
        }

        self.process_inputs(now);

        let effects = self.tracker.poll(now.monotonic_ms);
        if !effects.is_empty() {
            self.pending_redraw = true;
        }
        self.run_effects(&effects, now);

        self.expire_messages(now.monotonic_ms);
        self.refresh_dates(now);
        self.poll_reminder(now);

        if self.pending_redraw {
            self.pending_redraw = false;
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        }
    }

    pub fn with_screen<F>(&self, f: F)
    where
        F: FnOnce(Screen<'_>),
    {
        let style = self.style();
        let language = self.settings.language;
        let today = self.today.unwrap_or_default();
        let today_key = day_key(today);

        match self.overlay {
            None | Some(Overlay::GoalEditor) => {
                let title = self.active_title();
                let counter = self.counter_view(&title, &today_key);
                if self.overlay.is_some() {
                    f(Screen::GoalEditor { counter, style });
                } else {
                    f(Screen::Counter { counter, style });
                }
            }
            Some(Overlay::Packages) => {
                let packages = self.all_packages();
                f(Screen::Packages {
                    packages: &packages,
                    active_id: self.tracker.package_id(),
                    style,
                });
            }
            Some(Overlay::History) => {
                let step_totals = self.tracker.today_step_totals(&today_key);
                let days = self.tracker.stats().history();
                f(Screen::History {
                    today: &today_key,
                    today_total: self.tracker.stats().day_total(&today_key),
                    step_totals: &step_totals,
                    days: &days,
                    style,
                });
            }
            Some(Overlay::Duas) => {
                let duas = list_duas(language);
                f(Screen::Duas {
                    duas: &duas,
                    status: self.status.map(|status| status.text),
                    style,
                });
            }
            Some(Overlay::Calendar) => {
                let gregorian = calendar::gregorian_long(today, language);
                let hijri = calendar::hijri_long(today, language);
                let grid: Option<MonthGrid> = self
                    .calendar
                    .and_then(|cursor| calendar::month_grid(cursor.year, cursor.month, today, language));
                f(Screen::Calendar {
                    gregorian: &gregorian,
                    hijri: &hijri,
                    grid: grid.as_ref(),
                    weekdays: calendar::weekday_short_names(language),
                    style,
                });
            }
        }
    }

    fn style(&self) -> VisualStyle {
        VisualStyle {
            language: self.settings.language,
            dark_mode: self.settings.dark_mode,
        }
    }

    fn active_title(&self) -> String {
        let id = self.tracker.package_id();
        self.find_package(id)
            .map(|package| package.title)
            .unwrap_or_else(|| id.to_owned())
    }

    fn counter_view<'a>(&'a self, title: &'a str, today_key: &str) -> CounterView<'a> {
        let phase = match self.tracker.phase() {
            Phase::Counting => CounterPhase::Counting,
            Phase::Advancing { .. } => CounterPhase::Advancing,
            Phase::Completing { .. } => CounterPhase::Completed,
        };

        CounterView {
            package_title: title,
            steps: self.tracker.cycles(),
            step_index: self.tracker.index(),
            count: self.tracker.count(),
            target: self.tracker.target(),
            progress: self.tracker.progress_ratio(),
            remaining: self.tracker.remaining(),
            today_total: self.tracker.today_total(today_key),
            phase,
            quote: self.quote,
            banner: self.banner.map(|banner| banner.text),
            status: self.status.map(|status| status.text),
        }
    }

    /// Built-ins in the active language followed by user packages.
    fn all_packages(&self) -> Vec<Package> {
        let mut packages = content::list_packages(self.settings.language);
        packages.extend(self.user_packages.iter().cloned());
        packages
    }

    fn find_package(&self, id: &str) -> Option<Package> {
        content::find_package(self.settings.language, id).or_else(|| {
            self.user_packages
                .iter()
                .find(|package| package.id == id)
                .cloned()
        })
    }
}
