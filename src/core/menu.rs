use crate::core::{Company, Console, Department, Employee, Money, Result};

/// What the attribute prompt is going to search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Department,
    Employee,
}

#[derive(Debug)]
enum MenuState {
    AwaitSearchChoice,
    AwaitCategory,
    AwaitAttribute(Target),
    Display(Vec<String>),
    AwaitRepeat,
    Done,
}

/// Interactive prompt/response cycle over a read-only company directory.
///
/// All I/O goes through the [`Console`] port; running out of input (EOF)
/// is treated as declining and ends the loop cleanly.
pub struct MenuLoop<'a, C: Console> {
    company: &'a Company,
    console: C,
}

impl<'a, C: Console> MenuLoop<'a, C> {
    pub fn new(company: &'a Company, console: C) -> Self {
        Self { company, console }
    }

    /// Hands the console back, e.g. to inspect a scripted transcript.
    pub fn into_console(self) -> C {
        self.console
    }

    pub fn run(&mut self) -> Result<()> {
        let mut state = MenuState::AwaitSearchChoice;
        loop {
            state = match state {
                MenuState::AwaitSearchChoice => self.await_search_choice()?,
                MenuState::AwaitCategory => self.await_category()?,
                MenuState::AwaitAttribute(target) => self.await_attribute(target)?,
                MenuState::Display(lines) => {
                    for line in &lines {
                        self.console.write_line(line)?;
                    }
                    MenuState::AwaitRepeat
                }
                MenuState::AwaitRepeat => self.await_repeat()?,
                MenuState::Done => return Ok(()),
            };
        }
    }

    /// Writes the prompt, then reads one trimmed, lowercased answer.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        self.console.write_line(text)?;
        Ok(self
            .console
            .read_line()?
            .map(|line| line.trim().to_lowercase()))
    }

    fn await_search_choice(&mut self) -> Result<MenuState> {
        let question = format!("Search the company '{}'? (y/n)", self.company.name);
        let Some(answer) = self.prompt(&question)? else {
            return Ok(MenuState::Done);
        };
        Ok(match answer.as_str() {
            "y" => MenuState::AwaitCategory,
            "n" => {
                self.console.write_line("Goodbye!")?;
                MenuState::Done
            }
            other => {
                tracing::debug!("unrecognized yes/no answer: {other:?}");
                self.console.write_line("Invalid input. Try again.")?;
                MenuState::AwaitSearchChoice
            }
        })
    }

    fn await_category(&mut self) -> Result<MenuState> {
        let Some(category) =
            self.prompt("Enter a category to search (Company, Department, Employee):")?
        else {
            return Ok(MenuState::Done);
        };
        Ok(match category.as_str() {
            "company" => MenuState::Display(company_summary(self.company)),
            "department" => MenuState::AwaitAttribute(Target::Department),
            "employee" => MenuState::AwaitAttribute(Target::Employee),
            other => {
                // A bad category ends this search attempt, not the program.
                tracing::debug!("unrecognized category: {other:?}");
                self.console.write_line("Invalid search category.")?;
                MenuState::AwaitRepeat
            }
        })
    }

    fn await_attribute(&mut self, target: Target) -> Result<MenuState> {
        let hint = match target {
            Target::Department => "Enter an attribute to search (Name, EmployeeCount):",
            Target::Employee => "Enter an attribute to search (FullName, Position, Salary):",
        };
        let Some(attribute) = self.prompt(hint)? else {
            return Ok(MenuState::Done);
        };
        tracing::debug!(?target, %attribute, "running search");
        let lines = match target {
            Target::Department => {
                match self.company.find_department(department_predicate(&attribute)) {
                    Some(d) => vec![format!(
                        "Department: {}, employees: {}",
                        d.name,
                        d.employee_count()
                    )],
                    None => vec!["Department not found.".to_string()],
                }
            }
            Target::Employee => {
                match self.company.find_employee(employee_predicate(&attribute)) {
                    Some(e) => vec![format!(
                        "Employee: {}, position: {}, salary: {}",
                        e.full_name,
                        e.position,
                        e.payable_salary()
                    )],
                    None => vec!["Employee not found.".to_string()],
                }
            }
        };
        Ok(MenuState::Display(lines))
    }

    fn await_repeat(&mut self) -> Result<MenuState> {
        let Some(answer) = self.prompt("Search again? (y/n)")? else {
            return Ok(MenuState::Done);
        };
        Ok(if answer == "y" {
            MenuState::AwaitSearchChoice
        } else {
            MenuState::Done
        })
    }
}

fn company_summary(company: &Company) -> Vec<String> {
    let mut lines = vec![
        format!("Company: {}", company.name),
        format!("Departments: {}", company.departments.len()),
        "Employees per department:".to_string(),
    ];
    for dept in &company.departments {
        lines.push(format!("{}: {}", dept.name, dept.employee_count()));
    }
    lines
}

/// Department match: name equality (input is already lowercased) or the
/// employee count rendered as a string, compared literally against the
/// trimmed input. Literal on purpose, so "03" does not match a count of 3.
pub fn department_predicate(input: &str) -> impl Fn(&Department) -> bool + '_ {
    move |d| d.name.to_lowercase() == input || d.employee_count().to_string() == input
}

/// Employee match: full name or position equality (input is already
/// lowercased), or base-salary equality when the input parses as an amount.
/// Unparsable input just drops the salary sub-condition.
pub fn employee_predicate(input: &str) -> impl Fn(&Employee) -> bool + '_ {
    let salary = input.parse::<Money>().ok();
    move |e| {
        e.full_name.to_lowercase() == input
            || e.position.to_lowercase() == input
            || salary.is_some_and(|s| e.base_salary == s)
    }
}
