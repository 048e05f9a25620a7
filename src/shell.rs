//! Interactive menu session.
//!
//! A thin loop that reads a menu option, collects its arguments and calls
//! into [`Library`]. Generic over its input and output so a session can be
//! scripted.

use std::io::{BufRead, Write};

use crate::{
    config::AppConfig,
    error::{AppError, AppResult},
    models::{BorrowOutcome, Borrower, CreateBook, ReturnOutcome},
    Library,
};

/// Menu entries, numbered as displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Register = 1,
    ListCatalog = 2,
    Borrow = 3,
    Return = 4,
    Exit = 5,
    MyLoans = 6,
}

impl MenuOption {
    pub fn from_number(n: u32) -> Option<Self> {
        match n {
            1 => Some(MenuOption::Register),
            2 => Some(MenuOption::ListCatalog),
            3 => Some(MenuOption::Borrow),
            4 => Some(MenuOption::Return),
            5 => Some(MenuOption::Exit),
            6 => Some(MenuOption::MyLoans),
            _ => None,
        }
    }
}

/// Parse a typed integer, tolerating surrounding whitespace
pub fn parse_number(input: &str) -> AppResult<u32> {
    input
        .trim()
        .parse::<u32>()
        .map_err(|_| AppError::InvalidInput(format!("'{}' is not a whole number", input.trim())))
}

pub struct Shell<R, W> {
    input: R,
    output: W,
    admin: Borrower,
    reader: Borrower,
    explain_refusals: bool,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(config: &AppConfig, input: R, output: W) -> Self {
        Self {
            input,
            output,
            admin: Borrower::new(config.session.admin_name.clone(), true),
            reader: Borrower::new(config.session.reader_name.clone(), false),
            explain_refusals: config.lending.explain_refusals,
        }
    }

    /// The identity borrowing and returning books in this session
    pub fn reader(&self) -> &Borrower {
        &self.reader
    }

    /// Run until the exit option is chosen or input ends
    pub fn run(&mut self, library: &mut Library) -> AppResult<()> {
        writeln!(self.output, "Welcome to the library!")?;

        loop {
            self.print_menu()?;
            let Some(line) = self.prompt("Choose an option: ")? else {
                break;
            };

            let option = match parse_number(&line) {
                Ok(n) => MenuOption::from_number(n),
                Err(_) => {
                    writeln!(self.output, "Invalid option. Please try again.")?;
                    continue;
                }
            };

            let keep_going = match option {
                Some(MenuOption::Register) => self.register(library)?,
                Some(MenuOption::ListCatalog) => self.list_catalog(library)?,
                Some(MenuOption::Borrow) => self.borrow(library)?,
                Some(MenuOption::Return) => self.return_book(library)?,
                Some(MenuOption::MyLoans) => self.my_loans(library)?,
                Some(MenuOption::Exit) => false,
                None => {
                    writeln!(self.output, "Invalid option.")?;
                    true
                }
            };
            if !keep_going {
                break;
            }
        }

        writeln!(self.output, "Thank you, come back soon!")?;
        Ok(())
    }

    fn print_menu(&mut self) -> AppResult<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Menu:")?;
        writeln!(self.output, "1. Register book")?;
        writeln!(self.output, "2. Browse catalog")?;
        writeln!(self.output, "3. Borrow book")?;
        writeln!(self.output, "4. Return book")?;
        writeln!(self.output, "5. Exit")?;
        writeln!(self.output, "6. My loans")?;
        Ok(())
    }

    /// Print `label` and read one line. `None` once input is exhausted.
    fn prompt(&mut self, label: &str) -> AppResult<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn register(&mut self, library: &mut Library) -> AppResult<bool> {
        if !self.admin.is_admin() {
            writeln!(self.output, "Access denied.")?;
            return Ok(true);
        }

        let Some(title) = self.prompt("Title: ")? else {
            return Ok(false);
        };
        let Some(author) = self.prompt("Author: ")? else {
            return Ok(false);
        };
        let Some(genre) = self.prompt("Genre: ")? else {
            return Ok(false);
        };
        let Some(quantity) = self.prompt("Quantity: ")? else {
            return Ok(false);
        };

        let quantity = match parse_number(&quantity) {
            Ok(quantity) => quantity,
            Err(e) => {
                tracing::debug!("Registration input rejected: {}", e);
                writeln!(self.output, "Invalid quantity.")?;
                return Ok(true);
            }
        };

        let request = CreateBook {
            title,
            author,
            genre,
            quantity,
        };
        match library.register_book(request) {
            Ok(_) => writeln!(self.output, "Book registered successfully!")?,
            Err(AppError::Validation(msg)) => {
                writeln!(self.output, "Registration rejected: {}", msg)?
            }
            Err(e) => self.report_failure(&e)?,
        }
        Ok(true)
    }

    fn list_catalog(&mut self, library: &Library) -> AppResult<bool> {
        writeln!(self.output, "Library catalog:")?;
        for book in library.list_catalog() {
            writeln!(self.output, "{}", book)?;
        }
        Ok(true)
    }

    fn borrow(&mut self, library: &mut Library) -> AppResult<bool> {
        let Some(title) = self.prompt("Title of the book to borrow: ")? else {
            return Ok(false);
        };

        match library.borrow_book(&title, &mut self.reader) {
            Ok(BorrowOutcome::Borrowed(receipt)) => writeln!(
                self.output,
                "Book '{}' lent to {}.",
                receipt.title, receipt.borrower
            )?,
            Ok(refused) => {
                let message = if self.explain_refusals {
                    refusal_reason(&refused)
                } else {
                    "Borrow not permitted: loan limit reached or insufficient stock.".to_string()
                };
                writeln!(self.output, "{}", message)?
            }
            Err(e) => self.report_failure(&e)?,
        }
        Ok(true)
    }

    fn return_book(&mut self, library: &mut Library) -> AppResult<bool> {
        let Some(title) = self.prompt("Title of the book to return: ")? else {
            return Ok(false);
        };

        match library.return_book(&title, &mut self.reader) {
            Ok(ReturnOutcome::Returned(receipt)) => writeln!(
                self.output,
                "Book '{}' returned by {}.",
                receipt.title, receipt.borrower
            )?,
            Ok(ReturnOutcome::NotHeld) => {
                writeln!(self.output, "You have not borrowed this book.")?
            }
            Err(e) => self.report_failure(&e)?,
        }
        Ok(true)
    }

    fn my_loans(&mut self, library: &Library) -> AppResult<bool> {
        let held = library.held_books(&self.reader);
        if held.is_empty() {
            writeln!(self.output, "You have no books on loan.")?;
            return Ok(true);
        }

        writeln!(self.output, "Your loans:")?;
        for (loan, book) in held {
            writeln!(
                self.output,
                "{} by {} (since {})",
                book.title,
                book.author,
                loan.borrowed_at.format("%Y-%m-%d")
            )?;
        }
        Ok(true)
    }

    fn report_failure(&mut self, error: &AppError) -> AppResult<()> {
        tracing::error!("Operation failed: {}", error);
        writeln!(self.output, "Operation failed: {}", error)?;
        Ok(())
    }
}

fn refusal_reason(outcome: &BorrowOutcome) -> String {
    match outcome {
        BorrowOutcome::NotFound => "Borrow not permitted: no book with that title.".to_string(),
        BorrowOutcome::LimitReached { held, max } => {
            format!("Borrow not permitted: loan limit reached ({}/{}).", held, max)
        }
        BorrowOutcome::OutOfStock => "Borrow not permitted: no copies available.".to_string(),
        BorrowOutcome::Borrowed(receipt) => format!("Book '{}' lent.", receipt.title),
    }
}
