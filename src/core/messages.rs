use crate::domain::model::Language;

fn informal(language: Language) -> &'static str {
    match language {
        Language::En => "Hello",
        Language::Es => "Hola",
        Language::Fr => "Salut",
    }
}

fn formal(language: Language) -> &'static str {
    match language {
        Language::En => "Greetings",
        Language::Es => "Saludos",
        Language::Fr => "Bonjour",
    }
}

fn logged_in(language: Language) -> &'static str {
    match language {
        Language::En => "Logged in",
        Language::Es => "Inició sesión",
        Language::Fr => "Connecté",
    }
}

/// `<greeting> <first>!`
pub fn informal_greeting(language: Language, first_name: &str) -> String {
    format!("{} {}!", informal(language), first_name)
}

/// `<greeting>, <first> <last>`
pub fn formal_greeting(language: Language, full_name: &str) -> String {
    format!("{}, {}", formal(language), full_name)
}

/// `<logged in>: <first> <last>`
pub fn log_line(language: Language, full_name: &str) -> String {
    format!("{}: {}", logged_in(language), full_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_informal_greeting() {
        assert_eq!(informal_greeting(Language::En, "Luke"), "Hello Luke!");
        assert_eq!(informal_greeting(Language::Es, "Luke"), "Hola Luke!");
        assert_eq!(informal_greeting(Language::Fr, "Luke"), "Salut Luke!");
    }

    #[test]
    fn test_formal_greeting() {
        assert_eq!(formal_greeting(Language::En, "John Doe"), "Greetings, John Doe");
        assert_eq!(formal_greeting(Language::Es, "Luke Prosser"), "Saludos, Luke Prosser");
        assert_eq!(formal_greeting(Language::Fr, "John Doe"), "Bonjour, John Doe");
    }

    #[test]
    fn test_log_line() {
        assert_eq!(log_line(Language::En, "John Doe"), "Logged in: John Doe");
        assert_eq!(log_line(Language::Es, "John Doe"), "Inició sesión: John Doe");
        assert_eq!(log_line(Language::Fr, "John Doe"), "Connecté: John Doe");
    }

    #[test]
    fn test_no_escaping_or_casing() {
        assert_eq!(informal_greeting(Language::En, "<b>ann</b>"), "Hello <b>ann</b>!");
        assert_eq!(formal_greeting(Language::En, " "), "Greetings,  ");
    }
}
