use crate::calendar::WeekKey;
use crate::overrides::TimesheetRow;

#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyHours {
    pub employee: String,
    pub week: WeekKey,
    pub hours: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyHours {
    pub employee: String,
    pub hours: f64,
}

/// Heures travaillées par personne et par semaine ISO, dans l'ordre des lignes.
pub fn weekly_hours(rows: &[TimesheetRow]) -> Vec<WeeklyHours> {
    let mut out: Vec<WeeklyHours> = Vec::new();
    for row in rows {
        match out
            .iter_mut()
            .find(|w| w.employee == row.employee && w.week == row.week)
        {
            Some(total) => total.hours += row.worked_hours,
            None => out.push(WeeklyHours {
                employee: row.employee.clone(),
                week: row.week,
                hours: row.worked_hours,
            }),
        }
    }
    out
}

pub fn monthly_hours(rows: &[TimesheetRow]) -> Vec<MonthlyHours> {
    let mut out: Vec<MonthlyHours> = Vec::new();
    for row in rows {
        match out.iter_mut().find(|m| m.employee == row.employee) {
            Some(total) => total.hours += row.worked_hours,
            None => out.push(MonthlyHours {
                employee: row.employee.clone(),
                hours: row.worked_hours,
            }),
        }
    }
    out
}
