use tracing::log::info;
use loansim::books::domain::model::BookEntity;
use loansim::core::domain::Configuration;
use loansim::core::library::LibraryError;
use loansim::fines::FinePolicy;
use loansim::gateway::NotifyVia;
use loansim::loans::domain::{IssueOutcome, ReturnOutcome};
use loansim::loans::factory::create_loan_service;
use loansim::patrons::domain::model::PatronEntity;
use loansim::utils::logs::setup_tracing;

#[tokio::main]
async fn main() -> Result<(), LibraryError> {
    setup_tracing();

    let svc = create_loan_service(&Configuration::new("main"), FinePolicy::Standard, NotifyVia::Email);
    let book_id = svc.add_book(BookEntity::new(
        "978-0321125217", "Domain-Driven Design", "Eric Evans")).await?;
    let other_id = svc.add_book(BookEntity::new(
        "978-0134494166", "Clean Architecture", "Robert Martin")).await?;
    let ada = svc.add_patron(PatronEntity::new("Ada", "ada@org.cc")).await?;
    let alan = svc.add_patron(PatronEntity::new("Alan", "alan@org.cc")).await?;

    let issued = svc.issue_loan(ada.as_str(), book_id.as_str()).await?;
    let loan = match issued {
        IssueOutcome::Issued(loan) => loan,
        IssueOutcome::Rejected => return Err(LibraryError::runtime("book should be available", None)),
    };

    // second request for the same book is rejected without touching state
    if let IssueOutcome::Rejected = svc.issue_loan(alan.as_str(), book_id.as_str()).await? {
        info!("second loan for book {} was rejected", book_id);
    }
    let _ = svc.issue_loan(alan.as_str(), other_id.as_str()).await?;

    match svc.return_loan(loan.loan_id.as_str()).await? {
        ReturnOutcome::OnTime(loan) => info!("loan {} came back on time", loan.loan_id),
        ReturnOutcome::Late { loan, days_late, fine } => {
            info!("loan {} came back {} days late with fine {}", loan.loan_id, days_late, fine)
        }
        ReturnOutcome::AlreadyReturned(loan) => info!("loan {} was already returned", loan.loan_id),
    }

    for event in svc.events().await? {
        info!("outcome {} for {}", event.name, event.key);
    }
    Ok(())
}
