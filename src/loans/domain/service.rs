use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use async_trait::async_trait;
use chrono::Utc;
use tracing::log::{info, warn};
use crate::books::domain::model::BookEntity;
use crate::core::domain::{Configuration, Identifiable};
use crate::core::events::{DomainEvent, LoanEventType};
use crate::core::library::{BookStatus, LibraryError, LibraryResult, LoanStatus};
use crate::fines::domain::FineCalculator;
use crate::gateway::notify::Notifier;
use crate::loans::domain::{IssueOutcome, LoanService, ReturnOutcome};
use crate::loans::domain::model::LoanEntity;
use crate::loans::dto::LoanDto;
use crate::patrons::domain::model::PatronEntity;
use crate::utils::date;

#[derive(Default)]
struct LoanState {
    books: HashMap<String, BookEntity>,
    patrons: HashMap<String, PatronEntity>,
    // append-only, insertion order; a book returned and borrowed again
    // produces a second record
    loans: Vec<LoanEntity>,
    events: Vec<DomainEvent>,
}

// LoanManager orchestrates loan creation and return. It depends only on the
// FineCalculator and Notifier abstractions and owns the registry of books,
// patrons and issued loans. All state sits behind one mutex so each
// operation is atomic and a book can never carry two open loans.
pub struct LoanManager {
    config: Configuration,
    calculator: Box<dyn FineCalculator>,
    notifier: Box<dyn Notifier>,
    state: Mutex<LoanState>,
}

impl LoanManager {
    pub fn new(config: &Configuration, calculator: Box<dyn FineCalculator>,
               notifier: Box<dyn Notifier>) -> Self {
        Self {
            config: config.clone(),
            calculator,
            notifier,
            state: Mutex::new(LoanState::default()),
        }
    }

    fn locked(&self) -> LibraryResult<MutexGuard<'_, LoanState>> {
        self.state.lock().map_err(|err| LibraryError::runtime(
            format!("loan state lock poisoned {:?}", err).as_str(), None))
    }
}

#[async_trait]
impl LoanService for LoanManager {
    async fn add_book(&self, book: BookEntity) -> LibraryResult<String> {
        let mut state = self.locked()?;
        let book_id = book.id();
        if state.books.contains_key(book_id.as_str()) {
            return Err(LibraryError::validation(
                format!("book {} is already registered", book_id).as_str(), None));
        }
        state.books.insert(book_id.to_string(), book);
        Ok(book_id)
    }

    async fn add_patron(&self, patron: PatronEntity) -> LibraryResult<String> {
        let mut state = self.locked()?;
        let patron_id = patron.id();
        if state.patrons.contains_key(patron_id.as_str()) {
            return Err(LibraryError::validation(
                format!("patron {} is already registered", patron_id).as_str(), None));
        }
        state.patrons.insert(patron_id.to_string(), patron);
        Ok(patron_id)
    }

    async fn issue_loan(&self, patron_id: &str, book_id: &str) -> LibraryResult<IssueOutcome> {
        let (outcome, message, recipient) = {
            let mut guard = self.locked()?;
            let state = &mut *guard;
            let recipient = state.patrons.get(patron_id)
                .map(|patron| patron.email.to_string())
                .ok_or_else(|| LibraryError::not_found(
                    format!("patron with id {} not found", patron_id).as_str()))?;
            let book = state.books.get_mut(book_id)
                .ok_or_else(|| LibraryError::not_found(
                    format!("book with id {} not found", book_id).as_str()))?;
            if !book.is_available() {
                warn!("rejecting loan, book {} is not available", book_id);
                let event = DomainEvent::outcome(
                    LoanEventType::RejectedUnavailable, book_id, &*book)?;
                state.events.push(event);
                return Ok(IssueOutcome::Rejected);
            }
            book.book_status = BookStatus::CheckedOut;
            book.updated_at = Utc::now().naive_utc();
            let loan = LoanEntity::new(book_id, patron_id, self.config.loan_period_days);
            let message = format!("'{}' is due back on {}", book.title, loan.due_at.date());
            let dto = LoanDto::from(&loan);
            state.loans.push(loan);
            let outcome = IssueOutcome::Issued(dto);
            let event = DomainEvent::outcome(LoanEventType::Issued, book_id, &outcome)?;
            state.events.push(event);
            (outcome, message, recipient)
        };
        // best effort; a rejected notification never rolls back the loan
        if !self.notifier.send(message.as_str(), recipient.as_str()).await {
            warn!("notification for book {} was not accepted", book_id);
        }
        info!("issued loan for book {} to patron {}", book_id, patron_id);
        Ok(outcome)
    }

    async fn return_loan(&self, loan_id: &str) -> LibraryResult<ReturnOutcome> {
        let mut guard = self.locked()?;
        let state = &mut *guard;
        let loan = state.loans.iter_mut()
            .find(|loan| loan.loan_id.as_str() == loan_id)
            .ok_or_else(|| LibraryError::not_found(
                format!("loan with id {} not found", loan_id).as_str()))?;
        if !loan.is_open() {
            warn!("loan {} was already returned", loan_id);
            let outcome = ReturnOutcome::AlreadyReturned(LoanDto::from(&*loan));
            let event = DomainEvent::outcome(LoanEventType::AlreadyReturned, loan_id, &outcome)?;
            state.events.push(event);
            return Ok(outcome);
        }
        let now = Utc::now().naive_utc();
        let days_late = date::days_overdue(loan.due_at, now);
        loan.loan_status = LoanStatus::Returned;
        loan.returned_at = Some(now);
        let book_id = loan.book_id.to_string();
        let dto = LoanDto::from(&*loan);
        if let Some(book) = state.books.get_mut(book_id.as_str()) {
            book.book_status = BookStatus::Available;
            book.updated_at = now;
        }
        let outcome = if days_late > 0 {
            let fine = self.calculator.calculate(days_late);
            info!("loan {} returned {} days late with fine {}", loan_id, days_late, fine);
            ReturnOutcome::Late { loan: dto, days_late, fine }
        } else {
            info!("loan {} returned on time", loan_id);
            ReturnOutcome::OnTime(dto)
        };
        let kind = match outcome {
            ReturnOutcome::Late { .. } => LoanEventType::ReturnedLate,
            _ => LoanEventType::ReturnedOnTime,
        };
        let event = DomainEvent::outcome(kind, loan_id, &outcome)?;
        state.events.push(event);
        Ok(outcome)
    }

    async fn find_book(&self, book_id: &str) -> LibraryResult<BookEntity> {
        let state = self.locked()?;
        state.books.get(book_id).cloned()
            .ok_or_else(|| LibraryError::not_found(
                format!("book with id {} not found", book_id).as_str()))
    }

    async fn find_loan(&self, loan_id: &str) -> LibraryResult<LoanDto> {
        let state = self.locked()?;
        state.loans.iter()
            .find(|loan| loan.loan_id.as_str() == loan_id)
            .map(LoanDto::from)
            .ok_or_else(|| LibraryError::not_found(
                format!("loan with id {} not found", loan_id).as_str()))
    }

    async fn events(&self) -> LibraryResult<Vec<DomainEvent>> {
        let state = self.locked()?;
        Ok(state.events.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use async_trait::async_trait;
    use chrono::Duration;
    use crate::books::domain::model::BookEntity;
    use crate::core::domain::Configuration;
    use crate::core::events::LoanEventType;
    use crate::core::library::{BookStatus, LibraryError, LoanStatus};
    use crate::fines::factory::create_fine_calculator;
    use crate::fines::FinePolicy;
    use crate::gateway::factory::create_notifier;
    use crate::gateway::notify::Notifier;
    use crate::gateway::NotifyVia;
    use crate::loans::domain::{IssueOutcome, LoanService, ReturnOutcome};
    use crate::loans::domain::service::LoanManager;
    use crate::patrons::domain::model::PatronEntity;

    struct RecordingNotifier {
        accept: bool,
        sent: Arc<Mutex<Vec<(String, String)>>>,
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        async fn send(&self, message: &str, recipient: &str) -> bool {
            self.sent.lock().unwrap().push((message.to_string(), recipient.to_string()));
            self.accept
        }
    }

    fn build_manager(loan_period_days: i64, policy: FinePolicy) -> LoanManager {
        let config = Configuration::with_loan_period("test", loan_period_days);
        LoanManager::new(&config, create_fine_calculator(policy), create_notifier(NotifyVia::Email))
    }

    async fn issue_fixture(manager: &LoanManager) -> (String, String, String) {
        let book_id = manager.add_book(BookEntity::new("isbn", "Domain-Driven Design", "Eric Evans"))
            .await.expect("should add book");
        let patron_id = manager.add_patron(PatronEntity::new("Ada", "ada@org.cc"))
            .await.expect("should add patron");
        let outcome = manager.issue_loan(patron_id.as_str(), book_id.as_str())
            .await.expect("should issue loan");
        match outcome {
            IssueOutcome::Issued(loan) => (book_id, patron_id, loan.loan_id),
            IssueOutcome::Rejected => panic!("loan should not be rejected"),
        }
    }

    #[tokio::test]
    async fn test_should_issue_loan_with_due_date() {
        let manager = build_manager(14, FinePolicy::Standard);
        let book_id = manager.add_book(BookEntity::new("isbn", "title", "author"))
            .await.expect("should add book");
        let patron_id = manager.add_patron(PatronEntity::new("Ada", "ada@org.cc"))
            .await.expect("should add patron");
        let outcome = manager.issue_loan(patron_id.as_str(), book_id.as_str())
            .await.expect("should issue loan");
        let loan = match outcome {
            IssueOutcome::Issued(loan) => loan,
            IssueOutcome::Rejected => panic!("loan should not be rejected"),
        };
        assert_eq!(loan.loaned_at + Duration::days(14), loan.due_at);
        assert_eq!(LoanStatus::Open, loan.loan_status);
        let book = manager.find_book(book_id.as_str()).await.expect("should find book");
        assert_eq!(BookStatus::CheckedOut, book.book_status);
    }

    #[tokio::test]
    async fn test_should_reject_loan_for_checked_out_book() {
        let manager = build_manager(14, FinePolicy::Standard);
        let (book_id, patron_id, _) = issue_fixture(&manager).await;
        let outcome = manager.issue_loan(patron_id.as_str(), book_id.as_str())
            .await.expect("should report rejection");
        assert_eq!(IssueOutcome::Rejected, outcome);
        let book = manager.find_book(book_id.as_str()).await.expect("should find book");
        assert_eq!(BookStatus::CheckedOut, book.book_status);
        assert_eq!(1, manager.state.lock().unwrap().loans.len());
    }

    #[tokio::test]
    async fn test_should_return_on_time() {
        let manager = build_manager(14, FinePolicy::Standard);
        let (book_id, _, loan_id) = issue_fixture(&manager).await;
        let outcome = manager.return_loan(loan_id.as_str()).await.expect("should return loan");
        let loan = match outcome {
            ReturnOutcome::OnTime(loan) => loan,
            other => panic!("expected on-time return, got {:?}", other),
        };
        assert_eq!(LoanStatus::Returned, loan.loan_status);
        assert!(loan.returned_at.is_some());
        let book = manager.find_book(book_id.as_str()).await.expect("should find book");
        assert_eq!(BookStatus::Available, book.book_status);
    }

    #[tokio::test]
    async fn test_should_fine_late_return_per_policy() {
        let policies = vec![
            (FinePolicy::Standard, 30),
            (FinePolicy::Student, 15),
            (FinePolicy::Vip, 0),
        ];
        for (policy, expected_fine) in policies {
            // a negative loan period makes the loan three days overdue at issue
            let manager = build_manager(-3, policy);
            let (_, _, loan_id) = issue_fixture(&manager).await;
            let outcome = manager.return_loan(loan_id.as_str()).await.expect("should return loan");
            match outcome {
                ReturnOutcome::Late { loan, days_late, fine } => {
                    assert_eq!(3, days_late);
                    assert_eq!(expected_fine, fine);
                    assert_eq!(LoanStatus::Returned, loan.loan_status);
                }
                other => panic!("expected late return, got {:?}", other),
            }
        }
    }

    #[tokio::test]
    async fn test_should_ignore_second_return() {
        let manager = build_manager(14, FinePolicy::Standard);
        let (book_id, _, loan_id) = issue_fixture(&manager).await;
        let first = manager.return_loan(loan_id.as_str()).await.expect("should return loan");
        let returned_at = match first {
            ReturnOutcome::OnTime(loan) => loan.returned_at,
            other => panic!("expected on-time return, got {:?}", other),
        };
        let second = manager.return_loan(loan_id.as_str()).await.expect("should report no-op");
        match second {
            ReturnOutcome::AlreadyReturned(loan) => {
                assert_eq!(LoanStatus::Returned, loan.loan_status);
                assert_eq!(returned_at, loan.returned_at);
            }
            other => panic!("expected already-returned, got {:?}", other),
        }
        let book = manager.find_book(book_id.as_str()).await.expect("should find book");
        assert_eq!(BookStatus::Available, book.book_status);
    }

    #[tokio::test]
    async fn test_should_loan_book_again_after_return() {
        let manager = build_manager(14, FinePolicy::Standard);
        let (book_id, patron_id, loan_id) = issue_fixture(&manager).await;
        let _ = manager.return_loan(loan_id.as_str()).await.expect("should return loan");
        let outcome = manager.issue_loan(patron_id.as_str(), book_id.as_str())
            .await.expect("should issue second loan");
        assert!(matches!(outcome, IssueOutcome::Issued(_)));
        assert_eq!(2, manager.state.lock().unwrap().loans.len());
    }

    #[tokio::test]
    async fn test_should_notify_with_title_and_due_date() {
        let sent = Arc::new(Mutex::new(vec![]));
        let config = Configuration::new("test");
        let manager = LoanManager::new(&config,
                                       create_fine_calculator(FinePolicy::Standard),
                                       Box::new(RecordingNotifier { accept: true, sent: sent.clone() }));
        let (_, _, loan_id) = issue_fixture(&manager).await;
        let loan = manager.find_loan(loan_id.as_str()).await.expect("should find loan");
        let messages = sent.lock().unwrap();
        assert_eq!(1, messages.len());
        let (message, recipient) = &messages[0];
        assert!(message.contains("Domain-Driven Design"));
        assert!(message.contains(loan.due_at.date().to_string().as_str()));
        assert!(!message.contains(':'), "message should carry the date portion only: {}", message);
        assert_eq!("ada@org.cc", recipient.as_str());
    }

    #[tokio::test]
    async fn test_should_keep_loan_when_notification_rejected() {
        let sent = Arc::new(Mutex::new(vec![]));
        let config = Configuration::new("test");
        let manager = LoanManager::new(&config,
                                       create_fine_calculator(FinePolicy::Standard),
                                       Box::new(RecordingNotifier { accept: false, sent: sent.clone() }));
        let (book_id, _, loan_id) = issue_fixture(&manager).await;
        let loan = manager.find_loan(loan_id.as_str()).await.expect("should find loan");
        assert_eq!(LoanStatus::Open, loan.loan_status);
        let book = manager.find_book(book_id.as_str()).await.expect("should find book");
        assert_eq!(BookStatus::CheckedOut, book.book_status);
    }

    #[tokio::test]
    async fn test_should_fail_unknown_references() {
        let manager = build_manager(14, FinePolicy::Standard);
        assert!(matches!(manager.issue_loan("missing", "missing").await,
                         Err(LibraryError::NotFound { message: _ })));
        assert!(matches!(manager.return_loan("missing").await,
                         Err(LibraryError::NotFound { message: _ })));
        assert!(matches!(manager.find_book("missing").await,
                         Err(LibraryError::NotFound { message: _ })));
    }

    #[tokio::test]
    async fn test_should_reject_duplicate_registration() {
        let manager = build_manager(14, FinePolicy::Standard);
        let book = BookEntity::new("isbn", "title", "author");
        let _ = manager.add_book(book.clone()).await.expect("should add book");
        assert!(matches!(manager.add_book(book).await,
                         Err(LibraryError::Validation { message: _, reason_code: _ })));
    }

    #[tokio::test]
    async fn test_should_record_outcome_events_in_order() {
        let manager = build_manager(14, FinePolicy::Standard);
        let (book_id, patron_id, loan_id) = issue_fixture(&manager).await;
        let _ = manager.issue_loan(patron_id.as_str(), book_id.as_str())
            .await.expect("should report rejection");
        let _ = manager.return_loan(loan_id.as_str()).await.expect("should return loan");
        let _ = manager.return_loan(loan_id.as_str()).await.expect("should report no-op");
        let events = manager.events().await.expect("should snapshot events");
        let kinds: Vec<_> = events.iter().map(|event| event.kind).collect();
        assert_eq!(vec![
            LoanEventType::Issued,
            LoanEventType::RejectedUnavailable,
            LoanEventType::ReturnedOnTime,
            LoanEventType::AlreadyReturned,
        ], kinds);
    }
}
