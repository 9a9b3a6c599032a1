use std::fmt;
use std::ops::Add;
use std::str::FromStr;

use crate::utils::error::DirectoryError;

/// Fixed-point currency amount stored as cents.
///
/// User input accepts a plain integer or up to two fractional digits
/// ("120000", "120000.5", "120000.50"); anything else is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub fn from_whole(amount: i64) -> Self {
        Money(amount.saturating_mul(100))
    }

    pub fn cents(self) -> i64 {
        self.0
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl FromStr for Money {
    type Err = DirectoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let reject = || DirectoryError::MoneyParse {
            input: s.to_string(),
        };

        let (whole, frac) = match s.split_once('.') {
            Some((w, f)) => (w, Some(f)),
            None => (s, None),
        };
        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(reject());
        }
        let mut cents = whole
            .parse::<i64>()
            .map_err(|_| reject())?
            .checked_mul(100)
            .ok_or_else(reject)?;
        if let Some(frac) = frac {
            if frac.is_empty() || frac.len() > 2 || !frac.bytes().all(|b| b.is_ascii_digit()) {
                return Err(reject());
            }
            let mut sub = frac.parse::<i64>().map_err(|_| reject())?;
            if frac.len() == 1 {
                sub *= 10;
            }
            cents = cents.checked_add(sub).ok_or_else(reject)?;
        }
        Ok(Money(cents))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

/// The two employment kinds. A closed set, so a tagged enum with a match
/// beats trait objects here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmployeeKind {
    /// Salary plus a fixed bonus.
    Salaried { bonus: Money },
    /// Flat rate, no bonus.
    Contract,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub full_name: String,
    pub position: String,
    pub base_salary: Money,
    pub kind: EmployeeKind,
}

impl Employee {
    pub fn salaried(
        full_name: impl Into<String>,
        position: impl Into<String>,
        base_salary: Money,
        bonus: Money,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            position: position.into(),
            base_salary,
            kind: EmployeeKind::Salaried { bonus },
        }
    }

    pub fn contract(
        full_name: impl Into<String>,
        position: impl Into<String>,
        base_salary: Money,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            position: position.into(),
            base_salary,
            kind: EmployeeKind::Contract,
        }
    }

    /// The amount actually paid out, as opposed to the stored base salary.
    pub fn payable_salary(&self) -> Money {
        match self.kind {
            EmployeeKind::Salaried { bonus } => self.base_salary + bonus,
            EmployeeKind::Contract => self.base_salary,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Department {
    pub name: String,
    pub employees: Vec<Employee>,
}

impl Department {
    pub fn new(name: impl Into<String>, employees: Vec<Employee>) -> Self {
        Self {
            name: name.into(),
            employees,
        }
    }

    /// Always reflects the live collection; nothing is cached.
    pub fn employee_count(&self) -> usize {
        self.employees.len()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Company {
    pub name: String,
    pub departments: Vec<Department>,
}

impl Company {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            departments: Vec::new(),
        }
    }

    /// First department (in insertion order) satisfying the predicate.
    ///
    /// The predicate carries all the match logic; the scan itself knows
    /// nothing about which attribute is being compared.
    pub fn find_department<P>(&self, predicate: P) -> Option<&Department>
    where
        P: Fn(&Department) -> bool,
    {
        self.departments.iter().find(|d| predicate(d))
    }

    /// First employee in the flattened department-then-employee insertion
    /// order satisfying the predicate.
    pub fn find_employee<P>(&self, predicate: P) -> Option<&Employee>
    where
        P: Fn(&Employee) -> bool,
    {
        self.departments
            .iter()
            .flat_map(|d| d.employees.iter())
            .find(|e| predicate(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn salaried_pay_is_base_plus_bonus() {
        let e = Employee::salaried(
            "Иван Иванов",
            "Разработчик",
            Money::from_whole(120_000),
            Money::from_whole(20_000),
        );
        assert_eq!(e.payable_salary(), Money::from_whole(140_000));
    }

    #[test]
    fn contract_pay_is_base_unchanged() {
        let e = Employee::contract("Елена Петрова", "Аналитик", Money::from_whole(110_000));
        assert_eq!(e.payable_salary(), Money::from_whole(110_000));
    }

    #[test]
    fn zero_amounts_are_valid() {
        let zero_bonus =
            Employee::salaried("a", "b", Money::from_whole(50_000), Money::ZERO);
        assert_eq!(zero_bonus.payable_salary(), Money::from_whole(50_000));

        let unpaid = Employee::contract("c", "d", Money::ZERO);
        assert_eq!(unpaid.payable_salary(), Money::ZERO);
    }

    #[test]
    fn employee_count_tracks_the_live_collection() {
        let mut dept = Department::new("QA", vec![]);
        assert_eq!(dept.employee_count(), 0);

        dept.employees
            .push(Employee::contract("x", "tester", Money::from_whole(1)));
        assert_eq!(dept.employee_count(), 1);

        dept.employees.pop();
        assert_eq!(dept.employee_count(), 0);
    }

    fn two_dept_company() -> Company {
        let mut company = Company::new("Acme");
        company.departments.push(Department::new(
            "First",
            vec![
                Employee::contract("A", "dev", Money::from_whole(10)),
                Employee::contract("B", "dev", Money::from_whole(20)),
            ],
        ));
        company.departments.push(Department::new(
            "Second",
            vec![Employee::contract("C", "dev", Money::from_whole(10))],
        ));
        company
    }

    #[test]
    fn find_department_returns_first_match_in_insertion_order() {
        let company = two_dept_company();
        let hit = company.find_department(|d| d.employee_count() >= 1).unwrap();
        assert_eq!(hit.name, "First");
        assert!(company.find_department(|d| d.name == "Third").is_none());
    }

    #[test]
    fn find_employee_scans_departments_then_employees_in_order() {
        let company = two_dept_company();
        // "A" and "C" share a salary; the first department wins.
        let hit = company
            .find_employee(|e| e.base_salary == Money::from_whole(10))
            .unwrap();
        assert_eq!(hit.full_name, "A");
        assert!(company.find_employee(|e| e.full_name == "Z").is_none());
    }

    #[test]
    fn repeated_searches_on_an_unmodified_dataset_agree() {
        let company = two_dept_company();
        let first = company.find_employee(|e| e.position == "dev").unwrap();
        let second = company.find_employee(|e| e.position == "dev").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn money_parses_integers_and_two_decimals() {
        assert_eq!("140000".parse::<Money>().unwrap(), Money::from_whole(140_000));
        assert_eq!("95000.50".parse::<Money>().unwrap(), Money(9_500_050));
        assert_eq!("95000.5".parse::<Money>().unwrap(), Money(9_500_050));
        assert_eq!("  0  ".parse::<Money>().unwrap(), Money::ZERO);
    }

    #[test]
    fn money_rejects_junk() {
        for bad in ["", "abc", "-5", "+5", "1.234", "1.", ".5", "1,5"] {
            assert!(bad.parse::<Money>().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn money_rejects_amounts_that_overflow_the_cents_range() {
        // i64::MAX cents is 92233720368547758.07; anything past it must be
        // an Err, never a wrap or a panic.
        for bad in ["92233720368547758.99", "92233720368547759", "99999999999999999999"] {
            assert!(bad.parse::<Money>().is_err(), "accepted {bad:?}");
        }
        assert_eq!(
            "92233720368547758.07".parse::<Money>().unwrap(),
            Money(i64::MAX)
        );
    }

    #[test]
    fn money_displays_with_two_decimals() {
        assert_eq!(Money::from_whole(140_000).to_string(), "140000.00");
        assert_eq!(Money(9_500_050).to_string(), "95000.50");
    }

    #[test]
    fn money_displays_negative_amounts_with_a_single_sign() {
        assert_eq!((Money::from_whole(-1) + Money(-50)).to_string(), "-1.50");
        assert_eq!(Money(-5).to_string(), "-0.05");
    }

    #[test]
    fn from_whole_saturates_instead_of_overflowing() {
        assert_eq!(Money::from_whole(i64::MAX).cents(), i64::MAX);
        assert_eq!(Money::from_whole(i64::MIN).cents(), i64::MIN);
    }
}
