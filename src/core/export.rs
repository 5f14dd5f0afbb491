use anyhow::Result;
use std::fmt;
use std::str::FromStr;

use crate::db::Database;

/// Exportable tables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Table {
    Workouts,
    Meals,
    Goals,
}

impl FromStr for Table {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "workouts" => Ok(Self::Workouts),
            "meals" => Ok(Self::Meals),
            "goals" => Ok(Self::Goals),
            _ => anyhow::bail!("invalid table: {} (expected workouts/meals/goals)", s),
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Workouts => write!(f, "workouts"),
            Self::Meals => write!(f, "meals"),
            Self::Goals => write!(f, "goals"),
        }
    }
}

/// Quote a CSV field per RFC 4180: fields containing a comma, quote, or
/// newline are wrapped in double quotes with inner quotes doubled.
pub fn escape_field(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

fn opt_num<T: ToString>(v: Option<T>) -> String {
    v.map(|n| n.to_string()).unwrap_or_default()
}

fn opt_text(v: Option<&str>) -> String {
    escape_field(v.unwrap_or(""))
}

/// Full-table CSV dump, header row first. NULL renders as empty.
pub fn to_csv(db: &Database, table: Table) -> Result<String> {
    let mut out = String::new();
    match table {
        Table::Workouts => {
            out.push_str("id,date,type,duration_min,distance_km,sets,reps,weight_kg,notes,created_at\n");
            for w in db.list_workouts()? {
                out.push_str(&format!(
                    "{},{},{},{},{},{},{},{},{},{}\n",
                    w.id,
                    w.date,
                    escape_field(&w.workout_type),
                    opt_num(w.duration_min),
                    opt_num(w.distance_km),
                    opt_num(w.sets),
                    opt_num(w.reps),
                    opt_num(w.weight_kg),
                    opt_text(w.notes.as_deref()),
                    w.created_at.to_rfc3339(),
                ));
            }
        }
        Table::Meals => {
            out.push_str("id,date,meal_type,calories,protein_g,carbs_g,fat_g,items,created_at\n");
            for m in db.list_meals()? {
                out.push_str(&format!(
                    "{},{},{},{},{},{},{},{},{}\n",
                    m.id,
                    m.date,
                    escape_field(&m.meal_type),
                    opt_num(m.calories),
                    opt_num(m.protein_g),
                    opt_num(m.carbs_g),
                    opt_num(m.fat_g),
                    opt_text(m.items.as_deref()),
                    m.created_at.to_rfc3339(),
                ));
            }
        }
        Table::Goals => {
            out.push_str("id,key,value,unit,updated_at\n");
            for g in db.list_goals()? {
                out.push_str(&format!(
                    "{},{},{},{},{}\n",
                    g.id,
                    escape_field(&g.key),
                    g.value,
                    escape_field(&g.unit),
                    g.updated_at.to_rfc3339(),
                ));
            }
        }
    }
    Ok(out)
}

/// Full-table JSON dump (pretty-printed array).
pub fn to_json(db: &Database, table: Table) -> Result<String> {
    let json = match table {
        Table::Workouts => serde_json::to_string_pretty(&db.list_workouts()?)?,
        Table::Meals => serde_json::to_string_pretty(&db.list_meals()?)?,
        Table::Goals => serde_json::to_string_pretty(&db.list_goals()?)?,
    };
    Ok(json)
}
