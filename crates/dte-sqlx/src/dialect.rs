/// A SQL dialect, used to pick the column type a value is stored in.
///
/// # Example
///
/// ```
/// use dte_sqlx::{Date, Dialect, Time};
///
/// let dialect = Dialect::from_name("postgres").unwrap();
/// assert_eq!(Date::db_data_type(dialect), "DATE");
/// assert_eq!(Time::db_data_type(dialect), "TIME WITH TIME ZONE");
///
/// assert_eq!(Dialect::from_name("oracle"), None);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum Dialect {
    /// MySQL and MariaDB.
    MySql,
    /// PostgreSQL.
    Postgres,
    /// Microsoft SQL Server.
    SqlServer,
    /// SQLite.
    Sqlite,
}

impl Dialect {
    /// Looks up a dialect by its conventional driver name: `mysql`,
    /// `postgres`, `sqlserver` or `sqlite`.
    ///
    /// Names are matched exactly. Any other name returns `None`.
    pub fn from_name(name: &str) -> Option<Dialect> {
        match name {
            "mysql" => Some(Dialect::MySql),
            "postgres" => Some(Dialect::Postgres),
            "sqlserver" => Some(Dialect::SqlServer),
            "sqlite" => Some(Dialect::Sqlite),
            _ => None,
        }
    }

    /// Returns the conventional driver name of this dialect.
    pub fn name(self) -> &'static str {
        match self {
            Dialect::MySql => "mysql",
            Dialect::Postgres => "postgres",
            Dialect::SqlServer => "sqlserver",
            Dialect::Sqlite => "sqlite",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        let all = [
            Dialect::MySql,
            Dialect::Postgres,
            Dialect::SqlServer,
            Dialect::Sqlite,
        ];
        for dialect in all {
            assert_eq!(Dialect::from_name(dialect.name()), Some(dialect));
        }
        assert_eq!(Dialect::from_name("Postgres"), None);
        assert_eq!(Dialect::from_name(""), None);
    }
}
