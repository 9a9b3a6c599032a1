//! The demo dataset: built once at startup and never mutated afterwards.

use crate::domain::model::{Company, Department, Employee, Money};

pub fn sample_company() -> Company {
    let mut company = Company::new("ООО Ромашка");
    company.departments = vec![
        Department::new(
            "Отдел разработки",
            vec![
                Employee::salaried(
                    "Иван Иванов",
                    "Разработчик",
                    Money::from_whole(120_000),
                    Money::from_whole(20_000),
                ),
                Employee::salaried(
                    "Олег Сидоров",
                    "Дизайнер",
                    Money::from_whole(95_000),
                    Money::from_whole(15_000),
                ),
                Employee::contract("Елена Петрова", "Аналитик", Money::from_whole(110_000)),
            ],
        ),
        Department::new(
            "Отдел продаж",
            vec![
                Employee::salaried(
                    "Мария Васильева",
                    "Менеджер по продажам",
                    Money::from_whole(80_000),
                    Money::from_whole(12_000),
                ),
                Employee::salaried(
                    "Анна Кузнецова",
                    "Старший менеджер",
                    Money::from_whole(90_000),
                    Money::from_whole(18_000),
                ),
                Employee::contract(
                    "Сергей Николаев",
                    "Менеджер по работе с клиентами",
                    Money::from_whole(85_000),
                ),
            ],
        ),
        Department::new(
            "Отдел маркетинга",
            vec![
                Employee::salaried(
                    "Дарья Егорова",
                    "Маркетолог",
                    Money::from_whole(105_000),
                    Money::from_whole(17_500),
                ),
                Employee::salaried(
                    "Ирина Алексеева",
                    "PR-менеджер",
                    Money::from_whole(98_000),
                    Money::from_whole(15_000),
                ),
                Employee::contract("Дмитрий Андреев", "Рекламист", Money::from_whole(93_000)),
            ],
        ),
        Department::new(
            "Финансовый отдел",
            vec![
                Employee::salaried(
                    "Александр Морозов",
                    "Финансовый аналитик",
                    Money::from_whole(130_000),
                    Money::from_whole(21_000),
                ),
                Employee::salaried(
                    "Екатерина Соколова",
                    "Бухгалтер",
                    Money::from_whole(91_000),
                    Money::from_whole(14_000),
                ),
                Employee::contract("Михаил Михайлов", "Экономист", Money::from_whole(88_000)),
            ],
        ),
        Department::new(
            "HR отдел",
            vec![
                Employee::salaried(
                    "Ольга Горбунова",
                    "HR-менеджер",
                    Money::from_whole(97_000),
                    Money::from_whole(13_000),
                ),
                Employee::salaried(
                    "Алексей Чернов",
                    "Рекрутер",
                    Money::from_whole(83_000),
                    Money::from_whole(11_000),
                ),
                Employee::contract("Татьяна Орехова", "HR-специалист", Money::from_whole(87_000)),
            ],
        ),
        Department::new(
            "Отдел логистики",
            vec![
                Employee::salaried(
                    "Егор Титов",
                    "Логист",
                    Money::from_whole(99_000),
                    Money::from_whole(15_000),
                ),
                Employee::salaried(
                    "Денис Киселев",
                    "Аналитик логистических систем",
                    Money::from_whole(92_000),
                    Money::from_whole(16_000),
                ),
                Employee::contract(
                    "Вера Козлова",
                    "Специалист по закупкам",
                    Money::from_whole(94_000),
                ),
            ],
        ),
    ];
    company
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_shape_matches_the_demo() {
        let company = sample_company();
        assert_eq!(company.departments.len(), 6);
        assert!(company
            .departments
            .iter()
            .all(|d| d.employee_count() == 3));
    }
}
