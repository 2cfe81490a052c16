//! Built-in catalog shown when no catalog file is supplied.
//!
//! Ordered by relevance to low-level programming.

use super::Catalog;
use crate::model::project::ProjectRecord;

/// Returns the built-in project catalog.
pub fn default_catalog() -> Catalog {
    Catalog::from_records(vec![
        ProjectRecord::new(
            "C Interpreter",
            "Complete bytecode virtual machine interpreter implementation in C featuring scanner, compiler, and VM components. Includes comprehensive debugging tools, web demo interface, and extensive documentation. Demonstrates deep understanding of compiler design and virtual machine architecture.",
            "https://github.com/Software-Engineering-courses-homeworks/C-Interpreter",
        )
        .with_technologies([
            "C",
            "Virtual Machine",
            "Compiler Design",
            "Bytecode",
            "Memory Management",
            "Parser Design",
        ])
        .with_live_link("https://software-engineering-courses-homeworks.github.io/C-Interpreter/")
        .with_icon("⚙️"),
        ProjectRecord::new(
            "Unix Shell",
            "Advanced Unix shell implementation in C with specialized sub-shells for Math, String, and Logic operations. Features robust process management, command history, comprehensive error handling, and system call integration. Showcases expertise in operating systems and process control.",
            "https://github.com/Software-Engineering-courses-homeworks/unix-shell",
        )
        .with_technologies([
            "C",
            "Unix Systems",
            "Process Management",
            "System Calls",
            "Signal Handling",
            "IPC",
        ])
        .with_icon("🔧"),
        ProjectRecord::new(
            "Blib",
            "Full-stack library management system built with Java and JavaFX. Features comprehensive book management, user authentication, borrowing/returning system, reservation handling, and detailed reporting. Uses MySQL database with JDBC and OCSF for efficient client-server communication.",
            "https://github.com/Engineering-Methods-Course/Blib",
        )
        .with_technologies([
            "Java",
            "JavaFX",
            "MySQL",
            "JDBC",
            "OCSF",
            "Client-Server Architecture",
        ])
        .with_icon("📚"),
        ProjectRecord::new(
            "Cloud Project Phoenix",
            "Comprehensive cloud-based Jupyter Notebook platform with MQTT sensor data integration, real-time visualization, search engine functionality, user management system, and admin dashboard. Demonstrates proficiency in data processing and system integration.",
            "https://github.com/Cloud-Course-Group-Phoenix/Project-Pheonix",
        )
        .with_technologies([
            "Python",
            "Jupyter",
            "MQTT",
            "Cloud Computing",
            "Data Processing",
            "System Integration",
        ])
        .with_icon("☁️"),
        ProjectRecord::new(
            "Theatrix",
            "Modern cinema website built with HTML, CSS, and JavaScript. Features movie browsing, trailer viewing, ticket booking system, discount codes, form validation, and order confirmation. Includes responsive design and Hebrew language support with web workers for performance.",
            "https://github.com/archithectureproject/theatrix",
        )
        .with_technologies([
            "HTML",
            "CSS",
            "JavaScript",
            "Web Workers",
            "Form Validation",
            "Performance Optimization",
        ])
        .with_live_link("https://archithectureproject.github.io/theatrix/")
        .with_icon("🎭"),
        ProjectRecord::new(
            "Silver Sync",
            "React-based web game that challenges users to connect actors through movies and TV shows. Features real-time gameplay, user authentication, leaderboards, and customizable game challenges with TMDB API integration. Demonstrates full-stack development capabilities.",
            "https://github.com/Advance-Web-Design/silversync",
        )
        .with_technologies([
            "React",
            "Next.js",
            "Firebase",
            "TMDB API",
            "Tailwind CSS",
            "Vercel",
        ])
        .with_live_link("https://connect-the-shows-client.vercel.app")
        .with_icon("🎬"),
    ])
}
