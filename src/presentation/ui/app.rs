//! Main application orchestrator.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent};
use futures_util::StreamExt;
use ratatui::{DefaultTerminal, Frame};
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

use crate::application::dto::{
    Dialog, LoginResponse, Notice, ProfileForm, ProfileLoad, SaveOutcome,
};
use crate::application::services::{SessionManager, SessionState};
use crate::application::use_cases::{
    LoadProfileUseCase, LoginUseCase, ResolveSessionUseCase, UpdateProfileUseCase,
};
use crate::domain::entities::Catalog;
use crate::domain::errors::AuthError;
use crate::domain::ports::{AuthPort, ProfilePort, TokenStoragePort};
use crate::domain::route::Route;
use crate::infrastructure::config::{AppConfig, LessonSettings, QuizSettings};
use crate::presentation::events::{
    EventResult, dialog_char, is_force_quit, is_press, is_quit_event,
};
use crate::presentation::ui::{
    ExamAction, ExamScreen, HomeAction, HomeScreen, LessonAction, LessonScreen, LoadingScreen,
    LoginAction, LoginScreen, ProfileAction, ProfileScreen, QuizAction, QuizScreen,
};
use crate::presentation::widgets::{DialogPopup, NoticePopup};

/// Results of background work, tagged with the screen that started it.
#[derive(Debug)]
enum Action {
    SessionResolved(Route),
    LoginFinished {
        screen: u64,
        result: Result<LoginResponse, AuthError>,
    },
    ProfileLoaded {
        screen: u64,
        result: Result<ProfileLoad, AuthError>,
    },
    ProfileSaved {
        screen: u64,
        result: Result<SaveOutcome, AuthError>,
    },
    FeedbackElapsed {
        screen: u64,
    },
    SignedOut(Result<(), AuthError>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Confirm {
    Logout,
}

enum Screen {
    Loading(LoadingScreen),
    Login(LoginScreen),
    Home(HomeScreen),
    Lesson(LessonScreen),
    Quiz(QuizScreen),
    Exams(ExamScreen),
    Profile(ProfileScreen),
}

impl Screen {
    const fn name(&self) -> &'static str {
        match self {
            Self::Loading(_) => "loading",
            Self::Login(_) => "login",
            Self::Home(_) => "home",
            Self::Lesson(_) => "lesson",
            Self::Quiz(_) => "quiz",
            Self::Exams(_) => "exams",
            Self::Profile(_) => "profile",
        }
    }

    const fn requires_session(&self) -> bool {
        !matches!(self, Self::Loading(_) | Self::Login(_))
    }
}

/// Lesson and quiz behaviour taken from configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppSettings {
    /// Reward and end-of-list defaults.
    pub lesson: LessonSettings,
    /// Feedback delay.
    pub quiz: QuizSettings,
}

impl From<&AppConfig> for AppSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            lesson: config.lesson,
            quiz: config.quiz,
        }
    }
}

/// Terminal application: owns the current screen and the session.
pub struct App {
    catalog: Catalog,
    settings: AppSettings,
    session: SessionManager,
    session_rx: watch::Receiver<SessionState>,
    resolve_session: ResolveSessionUseCase,
    login: LoginUseCase,
    load_profile: LoadProfileUseCase,
    update_profile: UpdateProfileUseCase,
    screen: Screen,
    screen_id: u64,
    learner_name: Option<String>,
    notice: Option<Notice>,
    dialog: Option<(Dialog, Confirm)>,
    signing_out: bool,
    running: bool,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
}

impl App {
    /// Wires the use cases to the given ports.
    #[must_use]
    pub fn new(
        auth_port: Arc<dyn AuthPort>,
        profile_port: Arc<dyn ProfilePort>,
        storage_port: Arc<dyn TokenStoragePort>,
        catalog: Catalog,
        settings: AppSettings,
    ) -> Self {
        let session = SessionManager::new(storage_port.clone());
        let session_rx = session.subscribe();
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        Self {
            catalog,
            settings,
            resolve_session: ResolveSessionUseCase::new(storage_port, session.clone()),
            login: LoginUseCase::new(auth_port, session.clone()),
            load_profile: LoadProfileUseCase::new(profile_port.clone(), session.clone()),
            update_profile: UpdateProfileUseCase::new(profile_port, session.clone()),
            session,
            session_rx,
            screen: Screen::Loading(LoadingScreen),
            screen_id: 0,
            learner_name: None,
            notice: None,
            dialog: None,
            signing_out: false,
            running: true,
            action_tx,
            action_rx,
        }
    }

    /// # Errors
    /// Returns error if drawing to the terminal fails.
    pub async fn run(
        mut self,
        terminal: &mut DefaultTerminal,
        cli_token: Option<String>,
    ) -> color_eyre::Result<()> {
        let resolve = self.resolve_session.clone();
        self.spawn(async move { Action::SessionResolved(resolve.execute(cli_token).await) });

        let mut terminal_events = EventStream::new();
        terminal.draw(|frame| self.render(frame))?;

        while self.running {
            tokio::select! {
                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action);
                }

                Ok(()) = self.session_rx.changed() => {
                    let state = self.session_rx.borrow_and_update().clone();
                    self.on_session_change(&state);
                }

                Some(Ok(event)) = terminal_events.next() => {
                    if let Event::Key(key) = event
                        && is_press(&key)
                        && self.handle_key(key) == EventResult::Exit
                    {
                        self.running = false;
                    }
                }
            }

            terminal.draw(|frame| self.render(frame))?;
        }

        info!("Application exiting normally");
        Ok(())
    }

    fn spawn<F>(&self, task: F)
    where
        F: Future<Output = Action> + Send + 'static,
    {
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let action = task.await;
            if tx.send(action).is_err() {
                debug!("UI closed, dropping background result");
            }
        });
    }

    fn set_screen(&mut self, screen: Screen) {
        self.screen_id += 1;
        debug!(
            from = self.screen.name(),
            to = screen.name(),
            id = self.screen_id,
            "Switching screen"
        );
        self.screen = screen;
    }

    fn is_current(&self, screen: u64) -> bool {
        if screen == self.screen_id {
            return true;
        }
        debug!(stale = screen, current = self.screen_id, "Dropping result for closed screen");
        false
    }

    fn on_session_change(&mut self, state: &SessionState) {
        debug!(
            authenticated = state.is_authenticated(),
            screen = self.screen.name(),
            "Session changed"
        );
        match state.route() {
            None => {}
            Some(Route::Login) => {
                if self.screen.requires_session() && !self.signing_out {
                    self.notice = Some(Notice::from_error(&AuthError::SessionExpired));
                }
                self.signing_out = false;
                self.learner_name = None;
                self.dialog = None;
                if !matches!(self.screen, Screen::Login(_)) {
                    self.set_screen(Screen::Login(LoginScreen::new()));
                }
            }
            Some(Route::Home) => {
                if !self.screen.requires_session() {
                    self.open_home();
                }
            }
        }
    }

    fn open_home(&mut self) {
        let mut home = HomeScreen::new(&self.catalog);
        home.set_greeting(self.learner_name.clone());
        self.set_screen(Screen::Home(home));

        if self.learner_name.is_none() {
            self.spawn_profile_load();
        }
    }

    fn open_profile(&mut self) {
        self.set_screen(Screen::Profile(ProfileScreen::new()));
        self.spawn_profile_load();
    }

    fn open_lesson(&mut self, id: &str) {
        let Some(lesson) = self.catalog.lesson(id) else {
            warn!(lesson = id, "Lesson not in catalog");
            return;
        };
        let config = self.settings.lesson.config_for(lesson);
        info!(
            lesson = id,
            parts = config.parts.len(),
            reward = config.reward_points,
            policy = %config.end_of_list,
            "Opening lesson"
        );
        let screen = LessonScreen::new(lesson, config);
        self.set_screen(Screen::Lesson(screen));
    }

    fn open_quiz(&mut self, id: &str) {
        let Some(quiz) = self.catalog.quiz(id) else {
            warn!(quiz = id, "Quiz not in catalog");
            return;
        };
        info!(quiz = id, questions = quiz.questions.len(), "Opening quiz");
        let screen = QuizScreen::new(quiz);
        self.set_screen(Screen::Quiz(screen));
    }

    fn spawn_profile_load(&self) {
        let use_case = self.load_profile.clone();
        let screen = self.screen_id;
        self.spawn(async move {
            let result = use_case.execute().await;
            Action::ProfileLoaded { screen, result }
        });
    }

    fn submit_login(&mut self) {
        let Screen::Login(login) = &mut self.screen else {
            return;
        };
        login.set_submitting();
        let request = login.request();

        let use_case = self.login.clone();
        let screen = self.screen_id;
        self.spawn(async move {
            let result = use_case.execute(request).await;
            Action::LoginFinished { screen, result }
        });
    }

    fn submit_profile(&self, form: ProfileForm) {
        let use_case = self.update_profile.clone();
        let screen = self.screen_id;
        self.spawn(async move {
            let result = use_case.execute(&form).await;
            Action::ProfileSaved { screen, result }
        });
    }

    fn start_feedback_timer(&self) {
        let delay: Duration = self.settings.quiz.feedback_delay();
        let screen = self.screen_id;
        self.spawn(async move {
            tokio::time::sleep(delay).await;
            Action::FeedbackElapsed { screen }
        });
    }

    fn confirm(&mut self, confirm: Confirm) {
        match confirm {
            Confirm::Logout => {
                info!("Logout confirmed");
                self.signing_out = true;
                let session = self.session.clone();
                self.spawn(async move { Action::SignedOut(session.sign_out().await) });
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if is_force_quit(&key) {
            return EventResult::Exit;
        }

        if self.notice.take().is_some() {
            return EventResult::Consumed;
        }

        if let Some((_, confirm)) = &self.dialog {
            let confirm = *confirm;
            match dialog_char(&key).and_then(Dialog::resolve) {
                Some(true) => {
                    self.dialog = None;
                    self.confirm(confirm);
                }
                Some(false) => self.dialog = None,
                None => {}
            }
            return EventResult::Consumed;
        }

        match &mut self.screen {
            Screen::Loading(_) => {
                if is_quit_event(&key) {
                    return EventResult::Exit;
                }
            }
            Screen::Login(screen) => {
                if key.code == KeyCode::Esc {
                    return EventResult::Exit;
                }
                if screen.handle_key(key) == LoginAction::Submit {
                    self.submit_login();
                }
            }
            Screen::Home(screen) => match screen.handle_key(key) {
                HomeAction::None => {}
                HomeAction::OpenLesson(id) => self.open_lesson(&id),
                HomeAction::OpenQuiz(id) => self.open_quiz(&id),
                HomeAction::OpenExams => {
                    let screen = ExamScreen::new(&self.catalog);
                    self.set_screen(Screen::Exams(screen));
                }
                HomeAction::OpenProfile => self.open_profile(),
                HomeAction::Quit => return EventResult::Exit,
            },
            Screen::Lesson(screen) => match screen.handle_key(key) {
                LessonAction::None => {}
                LessonAction::Completed { reward_points } => {
                    info!(reward_points, "Lesson completed");
                    self.notice = Some(Notice::success(
                        "Lesson Complete!",
                        format!("Congratulations! You've earned {reward_points} XP!"),
                    ));
                }
                LessonAction::Back => self.open_home(),
            },
            Screen::Quiz(screen) => match screen.handle_key(key) {
                QuizAction::None => {}
                QuizAction::Answered(_) => self.start_feedback_timer(),
                QuizAction::Back => self.open_home(),
            },
            Screen::Exams(screen) => match screen.handle_key(key) {
                ExamAction::None => {}
                ExamAction::Back => self.open_home(),
            },
            Screen::Profile(screen) => match screen.handle_key(key) {
                ProfileAction::None => {}
                ProfileAction::Save(form) => self.submit_profile(form),
                ProfileAction::RequestLogout => {
                    self.dialog = Some((
                        Dialog::confirm("Log out", "Do you really want to log out?"),
                        Confirm::Logout,
                    ));
                }
                ProfileAction::Back => self.open_home(),
            },
        }

        EventResult::Continue
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::SessionResolved(route) => {
                info!(%route, "Session resolved");
            }
            Action::LoginFinished { screen, result } => {
                let outcome = result.as_ref().map(|response| response.token_persisted);
                debug!(?outcome, "Login finished");
                if !self.is_current(screen) {
                    return;
                }
                if let (Screen::Login(login), Err(e)) = (&mut self.screen, result) {
                    let notice = Notice::from_error(&e);
                    login.set_error(notice.message.clone());
                    if !e.is_validation() {
                        login.clear_password();
                    }
                    self.notice = Some(notice);
                }
            }
            Action::ProfileLoaded { screen, result } => {
                if !self.is_current(screen) {
                    return;
                }
                self.apply_profile_load(result);
            }
            Action::ProfileSaved { screen, result } => {
                if !self.is_current(screen) {
                    return;
                }
                self.apply_profile_save(result);
            }
            Action::FeedbackElapsed { screen } => {
                if !self.is_current(screen) {
                    return;
                }
                if let Screen::Quiz(quiz) = &mut self.screen {
                    quiz.finish_feedback();
                }
            }
            Action::SignedOut(result) => {
                if let Err(e) = result {
                    self.notice = Some(Notice::warning(
                        "Signed out",
                        format!("The saved session could not be removed: {e}"),
                    ));
                }
            }
        }
    }

    fn apply_profile_load(&mut self, result: Result<ProfileLoad, AuthError>) {
        match (&mut self.screen, result) {
            (Screen::Home(home), Ok(ProfileLoad::Loaded(profile))) => {
                self.learner_name = Some(profile.display_name().to_string());
                home.set_greeting(self.learner_name.clone());
            }
            (Screen::Home(_), Err(e)) => {
                warn!(error = %e, "Could not load learner name");
            }
            (Screen::Profile(screen), Ok(ProfileLoad::Loaded(profile))) => {
                self.learner_name = Some(profile.display_name().to_string());
                screen.set_profile(&profile);
            }
            (Screen::Profile(screen), Ok(ProfileLoad::Empty)) => screen.clear(),
            (Screen::Profile(screen), Err(e)) => {
                screen.clear();
                self.notice = Some(Notice::from_error(&e));
            }
            (_, Ok(ProfileLoad::SessionEnded)) => {
                debug!("Profile load ended the session");
            }
            _ => {}
        }
    }

    fn apply_profile_save(&mut self, result: Result<SaveOutcome, AuthError>) {
        let Screen::Profile(screen) = &mut self.screen else {
            return;
        };
        match result {
            Ok(SaveOutcome::Saved(update)) => {
                screen.mark_saved(&update);
                if let Some(name) = &update.name {
                    self.learner_name = Some(name.clone());
                }
                self.notice = Some(Notice::success("Profile updated", "Your details were saved."));
            }
            Ok(SaveOutcome::NoChanges) => {
                screen.set_ready();
                self.notice = Some(Notice::info("Nothing to save", "No changes detected."));
            }
            Err(e) => {
                screen.set_ready();
                self.notice = Some(Notice::from_error(&e));
            }
        }
    }

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        match &self.screen {
            Screen::Loading(screen) => frame.render_widget(screen, area),
            Screen::Login(screen) => frame.render_widget(screen, area),
            Screen::Home(screen) => frame.render_widget(screen, area),
            Screen::Lesson(screen) => frame.render_widget(screen, area),
            Screen::Quiz(screen) => frame.render_widget(screen, area),
            Screen::Exams(screen) => frame.render_widget(screen, area),
            Screen::Profile(screen) => frame.render_widget(screen, area),
        }

        if let Some((dialog, _)) = &self.dialog {
            frame.render_widget(DialogPopup::new(dialog), area);
        }
        if let Some(notice) = &self.notice {
            frame.render_widget(NoticePopup::new(notice), area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::NoticeLevel;
    use crate::domain::entities::{AuthToken, UserProfile};
    use crate::domain::errors::ValidationError;
    use crate::domain::ports::mocks::{MockAuthPort, MockProfilePort, MockTokenStorage};
    use crate::infrastructure::builtin_catalog;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        let mut profile = MockProfilePort::new();
        profile
            .expect_fetch_profile()
            .returning(|_| Ok(Some(UserProfile::new("Ana", "ana@example.org"))));
        App::new(
            Arc::new(MockAuthPort::accepting()),
            Arc::new(profile),
            Arc::new(MockTokenStorage::new()),
            builtin_catalog(),
            AppSettings::default(),
        )
    }

    fn signed_in_app() -> App {
        let mut app = app();
        let token = AuthToken::new_unchecked("session-token");
        app.session.adopt(token.clone());
        app.on_session_change(&SessionState::Authenticated(token));
        app
    }

    #[tokio::test]
    async fn test_authenticated_session_opens_home() {
        let app = signed_in_app();
        assert!(matches!(app.screen, Screen::Home(_)));
    }

    #[tokio::test]
    async fn test_anonymous_session_opens_login_without_notice() {
        let mut app = app();
        app.on_session_change(&SessionState::Anonymous);
        assert!(matches!(app.screen, Screen::Login(_)));
        assert!(app.notice.is_none());
    }

    #[tokio::test]
    async fn test_rejected_token_redirects_once_with_notice() {
        let mut app = signed_in_app();
        app.handle_key(key(KeyCode::Enter));
        assert!(matches!(app.screen, Screen::Lesson(_)));

        app.on_session_change(&SessionState::Anonymous);
        assert!(matches!(app.screen, Screen::Login(_)));
        let notice = app.notice.clone().unwrap();
        assert_eq!(notice.level, NoticeLevel::Warning);
        assert_eq!(notice.title, "Session expired");

        let id = app.screen_id;
        app.on_session_change(&SessionState::Anonymous);
        assert_eq!(app.screen_id, id);
    }

    #[tokio::test]
    async fn test_confirmed_logout_has_no_expiry_notice() {
        let mut app = signed_in_app();
        app.handle_key(key(KeyCode::Char('p')));
        assert!(matches!(app.screen, Screen::Profile(_)));

        app.handle_key(KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL));
        assert!(app.dialog.is_some());
        assert_eq!(app.handle_key(key(KeyCode::Char('y'))), EventResult::Consumed);
        assert!(app.dialog.is_none());

        app.on_session_change(&SessionState::Anonymous);
        assert!(matches!(app.screen, Screen::Login(_)));
        assert!(app.notice.is_none());
    }

    #[tokio::test]
    async fn test_declined_logout_stays_on_profile() {
        let mut app = signed_in_app();
        app.handle_key(key(KeyCode::Char('p')));
        app.handle_key(KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL));
        app.handle_key(key(KeyCode::Char('n')));
        assert!(app.dialog.is_none());
        assert!(!app.signing_out);
        assert!(matches!(app.screen, Screen::Profile(_)));
    }

    #[tokio::test]
    async fn test_notice_swallows_next_key() {
        let mut app = signed_in_app();
        app.notice = Some(Notice::info("Hello", "World"));
        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), EventResult::Consumed);
        assert!(app.notice.is_none());
        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), EventResult::Exit);
    }

    #[tokio::test]
    async fn test_lesson_completion_shows_reward() {
        let mut app = signed_in_app();
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Char('c')));
        let notice = app.notice.clone().unwrap();
        assert_eq!(notice.title, "Lesson Complete!");
        assert!(notice.message.contains("75 XP"));
    }

    #[tokio::test]
    async fn test_feedback_for_closed_screen_is_dropped() {
        let mut app = signed_in_app();
        for _ in 0..3 {
            app.handle_key(key(KeyCode::Down));
        }
        app.handle_key(key(KeyCode::Enter));
        assert!(matches!(app.screen, Screen::Quiz(_)));
        app.handle_key(key(KeyCode::Char('1')));

        let stale = app.screen_id - 1;
        app.handle_action(Action::FeedbackElapsed { screen: stale });
        let Screen::Quiz(quiz) = &app.screen else {
            panic!("expected quiz screen");
        };
        assert!(quiz.session().pending().is_some());

        app.handle_action(Action::FeedbackElapsed {
            screen: app.screen_id,
        });
        let Screen::Quiz(quiz) = &app.screen else {
            panic!("expected quiz screen");
        };
        assert_eq!(quiz.session().question_number(), 2);
    }

    #[tokio::test]
    async fn test_exam_browser_search_and_back() {
        let mut app = signed_in_app();
        app.handle_key(key(KeyCode::Char('e')));
        let Screen::Exams(exams) = &app.screen else {
            panic!("expected exam screen");
        };
        assert_eq!(exams.results().len(), 3);

        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), EventResult::Continue);
        assert!(matches!(app.screen, Screen::Exams(_)));

        app.handle_key(key(KeyCode::Esc));
        assert!(matches!(app.screen, Screen::Home(_)));
    }

    #[tokio::test]
    async fn test_profile_load_error_clears_form_and_notifies() {
        let mut app = signed_in_app();
        app.handle_key(key(KeyCode::Char('p')));
        app.handle_action(Action::ProfileLoaded {
            screen: app.screen_id,
            result: Err(AuthError::network("timed out")),
        });
        assert_eq!(app.notice.clone().unwrap().title, "Connection problem");
    }

    #[tokio::test]
    async fn test_login_error_shows_message() {
        let mut app = app();
        app.on_session_change(&SessionState::Anonymous);
        app.handle_action(Action::LoginFinished {
            screen: app.screen_id,
            result: Err(AuthError::InvalidCredentials),
        });
        assert_eq!(app.notice.clone().unwrap().message, "Incorrect password.");
    }

    fn login_with_password(app: &mut App) {
        app.on_session_change(&SessionState::Anonymous);
        for c in "ana".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Tab));
        for c in "senha".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn login_screen(app: &App) -> &LoginScreen {
        let Screen::Login(login) = &app.screen else {
            panic!("expected login screen");
        };
        login
    }

    #[tokio::test]
    async fn test_form_error_keeps_typed_password() {
        let mut app = app();
        login_with_password(&mut app);
        app.handle_action(Action::LoginFinished {
            screen: app.screen_id,
            result: Err(ValidationError::MalformedEmail.into()),
        });
        assert!(login_screen(&app).has_password());
    }

    #[tokio::test]
    async fn test_rejected_login_wipes_password() {
        let mut app = app();
        login_with_password(&mut app);
        app.handle_action(Action::LoginFinished {
            screen: app.screen_id,
            result: Err(AuthError::InvalidCredentials),
        });
        assert!(!login_screen(&app).has_password());
    }
}
