//! User-facing result messages, English and Urdu.
//!
//! Message language follows the transcript's language, so an Urdu utterance
//! gets an Urdu toast regardless of the host UI locale.

use todos::Todo;

use crate::command::Language;

pub fn created(language: Language, title: &str) -> String {
    match language {
        Language::En => format!("Created todo: \"{}\"", title),
        Language::Ur => format!("نیا کام بنایا گیا: \"{}\"", title),
    }
}

pub fn completed(language: Language, title: &str) -> String {
    match language {
        Language::En => format!("Completed todo: \"{}\"", title),
        Language::Ur => format!("کام مکمل ہوا: \"{}\"", title),
    }
}

pub fn reopened(language: Language, title: &str) -> String {
    match language {
        Language::En => format!("Reopened todo: \"{}\"", title),
        Language::Ur => format!("کام دوبارہ کھولا گیا: \"{}\"", title),
    }
}

pub fn deleted(language: Language, title: &str) -> String {
    match language {
        Language::En => format!("Deleted todo: \"{}\"", title),
        Language::Ur => format!("کام حذف کیا گیا: \"{}\"", title),
    }
}

pub fn not_found(language: Language, fragment: &str) -> String {
    match language {
        Language::En => format!("Todo not found: {}", fragment),
        Language::Ur => format!("کام نہیں ملا: {}", fragment),
    }
}

pub fn ambiguous(language: Language, candidates: &[Todo]) -> String {
    let titles = candidates
        .iter()
        .map(|t| format!("\"{}\"", t.title))
        .collect::<Vec<_>>()
        .join(", ");
    match language {
        Language::En => format!(
            "Multiple todos match: {}. Please be more specific.",
            titles
        ),
        Language::Ur => format!("ایک سے زیادہ کام ملے: {}۔ براہ کرم وضاحت کریں۔", titles),
    }
}

pub fn missing_title(language: Language) -> String {
    match language {
        Language::En => "Please say a title for the todo.".to_string(),
        Language::Ur => "براہ کرم کام کا عنوان بتائیں۔".to_string(),
    }
}

pub fn unrecognized(language: Language) -> String {
    match language {
        Language::En => "I didn't understand that command. Please try again.".to_string(),
        Language::Ur => "میں یہ حکم نہیں سمجھ سکی۔ براہ کرم دوبارہ کوشش کریں۔".to_string(),
    }
}

pub fn mutation_failed(language: Language, detail: &str) -> String {
    match language {
        Language::En => format!("Something went wrong: {}", detail),
        Language::Ur => format!("کارروائی ناکام ہوئی: {}", detail),
    }
}

pub fn todo_list(language: Language, todos: &[Todo]) -> String {
    if todos.is_empty() {
        return match language {
            Language::En => "Your todo list is empty.".to_string(),
            Language::Ur => "آپ کی فہرست خالی ہے۔".to_string(),
        };
    }
    let header = match language {
        Language::En => format!(
            "You have {} todo{}:",
            todos.len(),
            if todos.len() == 1 { "" } else { "s" }
        ),
        Language::Ur => format!("آپ کے {} کام:", todos.len()),
    };
    render_list(header, todos)
}

pub fn filtered_list(language: Language, todos: &[Todo], completed: bool) -> String {
    if todos.is_empty() {
        return match (language, completed) {
            (Language::En, true) => "No completed todos.".to_string(),
            (Language::En, false) => "No pending todos.".to_string(),
            (Language::Ur, true) => "کوئی مکمل کام نہیں۔".to_string(),
            (Language::Ur, false) => "کوئی باقی کام نہیں۔".to_string(),
        };
    }
    let header = match (language, completed) {
        (Language::En, true) => format!("{} completed:", todos.len()),
        (Language::En, false) => format!("{} pending:", todos.len()),
        (Language::Ur, true) => format!("{} مکمل کام:", todos.len()),
        (Language::Ur, false) => format!("{} باقی کام:", todos.len()),
    };
    render_list(header, todos)
}

pub fn search_results(language: Language, fragment: &str, todos: &[Todo]) -> String {
    if todos.is_empty() {
        return match language {
            Language::En => format!("No todos matching: {}", fragment),
            Language::Ur => format!("کوئی کام نہیں ملا: {}", fragment),
        };
    }
    let header = match language {
        Language::En => format!("Found {} matching \"{}\":", todos.len(), fragment),
        Language::Ur => format!("\"{}\" سے ملتے {} کام:", fragment, todos.len()),
    };
    render_list(header, todos)
}

fn render_list(header: String, todos: &[Todo]) -> String {
    let mut out = header;
    for todo in todos {
        let marker = if todo.completed { "[x]" } else { "[ ]" };
        out.push_str(&format!("\n  {} {}", marker, todo.title));
    }
    out
}
