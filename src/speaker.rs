use std::fmt::{Display, Formatter};

/// Speaker identity: surname, given name and patronymic.
///
/// # Examples
/// ```
/// use conference_schedule::speaker::Speaker;
/// let speaker = Speaker::new("Иванов", "Иван", "Иванович");
/// assert_eq!(speaker.to_string(), "Иванов Иван Иванович");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Speaker {
    surname: String,
    name: String,
    patronymic: String,
}

impl Speaker {
    /// Create a new [Speaker]
    pub fn new(surname: &str, name: &str, patronymic: &str) -> Speaker {
        Speaker {
            surname: surname.to_string(),
            name: name.to_string(),
            patronymic: patronymic.to_string(),
        }
    }

    /// Get the surname.
    pub fn surname(&self) -> &str {
        &self.surname
    }

    /// Get the given name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the patronymic.
    pub fn patronymic(&self) -> &str {
        &self.patronymic
    }
}

impl Display for Speaker {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.surname, self.name, self.patronymic)
    }
}
