//! crates/smartx_core/src/catalog.rs
//!
//! The static sample data every screen renders from. There is no backend, so
//! this module is the single source of catalog records; screens never keep
//! private copies.

use crate::domain::{
    ChatMessage, ChatSummary, ClassSession, MaterialItem, MockTest, Presence, SessionKind,
    StudentRequest, SubjectShelf, Transaction, TransactionStatus, Tutor,
};

const RAJESH_AVATAR: &str = "https://images.unsplash.com/photo-1614283233556-f35b0c801ef1?auto=format&fit=crop&q=80&w=150&h=150";
const PRIYA_AVATAR: &str = "https://images.unsplash.com/photo-1594136973333-cd5566f80993?auto=format&fit=crop&q=80&w=150&h=150";
const AMIT_AVATAR: &str = "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?auto=format&fit=crop&q=80&w=150&h=150";
const ANJALI_AVATAR: &str = "https://images.unsplash.com/photo-1589156229687-496a31ad1d1f?auto=format&fit=crop&q=80&w=150&h=150";

/// Subject chips on the directory. "All" disables the subject filter.
pub const DIRECTORY_SUBJECTS: [&str; 6] =
    ["All", "Mathematics", "Physics", "English", "Chemistry", "Biology"];

pub const TEST_CATEGORIES: [&str; 5] = ["All", "Mathematics", "Physics", "IIT-JEE", "NEET"];

/// Directory rows as compiled-in constants; `tutors()` turns them into records.
struct TutorSeed {
    id: &'static str,
    name: &'static str,
    subjects: &'static [&'static str],
    rating: f32,
    reviews_count: u32,
    hourly_rate: u32,
    experience: &'static str,
    avatar: &'static str,
}

const TUTOR_SEEDS: [TutorSeed; 3] = [
    TutorSeed {
        id: "1",
        name: "Rajesh Kumar",
        subjects: &["Mathematics", "Physics"],
        rating: 4.8,
        reviews_count: 128,
        hourly_rate: 500,
        experience: "8 Yrs",
        avatar: RAJESH_AVATAR,
    },
    TutorSeed {
        id: "2",
        name: "Priya Singh",
        subjects: &["English", "Literature"],
        rating: 4.9,
        reviews_count: 85,
        hourly_rate: 400,
        experience: "5 Yrs",
        avatar: PRIYA_AVATAR,
    },
    TutorSeed {
        id: "3",
        name: "Amit Patel",
        subjects: &["Chemistry", "Biology"],
        rating: 5.0,
        reviews_count: 42,
        hourly_rate: 600,
        experience: "12 Yrs",
        avatar: AMIT_AVATAR,
    },
];

impl From<&TutorSeed> for Tutor {
    fn from(seed: &TutorSeed) -> Self {
        Tutor {
            id: seed.id.to_string(),
            name: seed.name.to_string(),
            subject: seed.subjects.iter().map(|s| s.to_string()).collect(),
            rating: seed.rating,
            reviews_count: seed.reviews_count,
            hourly_rate: seed.hourly_rate,
            experience: seed.experience.to_string(),
            verified: true,
            avatar: seed.avatar.to_string(),
        }
    }
}

pub fn tutors() -> Vec<Tutor> {
    TUTOR_SEEDS.iter().map(Tutor::from).collect()
}

pub fn find_tutor(id: &str) -> Option<Tutor> {
    tutors().into_iter().find(|t| t.id == id)
}

/// Long-form profile text for the tutor detail screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TutorBio {
    pub bio: &'static str,
    pub qualifications: &'static [&'static str],
}

pub fn tutor_bio() -> TutorBio {
    TutorBio {
        bio: "Dedicated educator with a passion for simplifying complex mathematical concepts. I help students achieve their academic goals through personalized attention and innovative teaching methods.",
        qualifications: &["M.Sc. Mathematics, IIT Bombay", "B.Ed, Delhi University"],
    }
}

pub fn student_requests() -> Vec<StudentRequest> {
    vec![
        StudentRequest {
            name: "Karan Sharma".to_string(),
            subject: "JEE Physics".to_string(),
            detail: "Looking for a 1-month crash course.".to_string(),
        },
        StudentRequest {
            name: "Sneha Reddy".to_string(),
            subject: "Class 10 Math".to_string(),
            detail: "Need help with Trigonometry specifically.".to_string(),
        },
    ]
}

pub fn chats() -> Vec<ChatSummary> {
    vec![
        ChatSummary {
            id: "1".to_string(),
            name: "Amit Sir".to_string(),
            last_msg: "Don't forget to solve chapter 5".to_string(),
            time: "10:32 AM".to_string(),
            unread: 2,
            avatar: RAJESH_AVATAR.to_string(),
            status: Presence::Online,
            last_seen: None,
        },
        ChatSummary {
            id: "2".to_string(),
            name: "Physics Doubt Hub".to_string(),
            last_msg: "Shreya posted a new doubt".to_string(),
            time: "Yesterday".to_string(),
            unread: 0,
            avatar: PRIYA_AVATAR.to_string(),
            status: Presence::Offline,
            last_seen: Some("15m ago".to_string()),
        },
        ChatSummary {
            id: "3".to_string(),
            name: "Anjali Gupta".to_string(),
            last_msg: "The notes have been uploaded".to_string(),
            time: "Monday".to_string(),
            unread: 0,
            avatar: ANJALI_AVATAR.to_string(),
            status: Presence::Away,
            last_seen: None,
        },
    ]
}

/// The opening thread of a conversation, with `me` as the local user's display name.
pub fn seed_thread(me: &str) -> Vec<ChatMessage> {
    let message = |id: &str, sender: &str, text: &str, timestamp: &str, is_me: bool| ChatMessage {
        id: id.to_string(),
        sender: sender.to_string(),
        text: text.to_string(),
        timestamp: timestamp.to_string(),
        is_me,
    };
    vec![
        message("1", "Amit Sir", "Hello! Namaste \u{1F64F} How can I help you with your mathematics studies today?", "10:30 AM", false),
        message("2", me, "I am looking for help with Algebra chapter 4.", "10:32 AM", true),
        message("3", "Amit Sir", "Sure! I have 5 years experience teaching Class 10. We can start tomorrow.", "10:33 AM", false),
    ]
}

pub fn class_sessions() -> Vec<ClassSession> {
    let session = |id: &str, title: &str, tutor_name: &str, time: &str, kind, subject: &str, thumbnail: &str| ClassSession {
        id: id.to_string(),
        title: title.to_string(),
        tutor_name: tutor_name.to_string(),
        time: time.to_string(),
        kind,
        subject: subject.to_string(),
        thumbnail: thumbnail.to_string(),
    };
    vec![
        session("1", "Quadratic Equations Deep Dive", "Prof. Rajesh Sharma", "10:00 AM", SessionKind::Live, "Mathematics",
            "https://images.unsplash.com/photo-1635070041078-e363dbe005cb?auto=format&fit=crop&q=80&w=400"),
        session("2", "Modern Physics - Atomic Structure", "Dr. Anita Verma", "Yesterday", SessionKind::Recorded, "Physics",
            "https://images.unsplash.com/photo-1636466497217-26a8cbeaf0aa?auto=format&fit=crop&q=80&w=400"),
        session("3", "Organic Chemistry Basics", "Prof. S. Gupta", "2:00 PM", SessionKind::Live, "Chemistry",
            "https://images.unsplash.com/photo-1532187863486-abf51ad990c5?auto=format&fit=crop&q=80&w=400"),
        session("4", "Grammar 101: Parts of Speech", "Smt. Meenakshi Iyer", "2 Days ago", SessionKind::Recorded, "English",
            "https://images.unsplash.com/photo-1456513080510-7bf3a84b82f8?auto=format&fit=crop&q=80&w=400"),
    ]
}

pub fn mock_tests() -> Vec<MockTest> {
    let test = |id: &str, title: &str, category: &str, duration: &str, questions, difficulty: &str| MockTest {
        id: id.to_string(),
        title: title.to_string(),
        category: category.to_string(),
        duration: duration.to_string(),
        questions,
        difficulty: difficulty.to_string(),
    };
    vec![
        test("1", "Calculus Mock Test 1", "Mathematics", "60 mins", 25, "High"),
        test("2", "Newtonian Physics Quiz", "Physics", "30 mins", 15, "Medium"),
        test("3", "Chapter-wise: Algebra", "Mathematics", "45 mins", 20, "Easy"),
        test("4", "JEE Advanced Paper-1", "IIT-JEE", "180 mins", 60, "Extreme"),
    ]
}

pub fn subject_shelves() -> Vec<SubjectShelf> {
    [
        ("Mathematics", 124, "functions"),
        ("Physics", 85, "science"),
        ("Chemistry", 62, "biotech"),
        ("English", 45, "translate"),
        ("Biology", 38, "biology"),
        ("Social Studies", 55, "public"),
    ]
    .into_iter()
    .map(|(name, items, icon)| SubjectShelf {
        name: name.to_string(),
        items,
        icon: icon.to_string(),
    })
    .collect()
}

pub fn recent_materials() -> Vec<MaterialItem> {
    [
        ("Algebra Formula Sheet", "PDF", "1.2 MB", "Today"),
        ("Optics Chapter Notes", "PDF", "4.5 MB", "Yesterday"),
    ]
    .into_iter()
    .map(|(title, format, size, date)| MaterialItem {
        title: title.to_string(),
        format: format.to_string(),
        size: size.to_string(),
        date: date.to_string(),
    })
    .collect()
}

pub fn transactions() -> Vec<Transaction> {
    [
        ("TXN-9281", "Mathematics Coaching Fee", "\u{20B9}5,000", TransactionStatus::Success, "Sep 01, 2025"),
        ("TXN-8822", "Physics Demo Class", "\u{20B9}0", TransactionStatus::Free, "Aug 28, 2025"),
        ("TXN-7612", "Study Library Subscription", "\u{20B9}499", TransactionStatus::Success, "Aug 15, 2025"),
    ]
    .into_iter()
    .map(|(id, title, amount, status, date)| Transaction {
        id: id.to_string(),
        title: title.to_string(),
        amount: amount.to_string(),
        status,
        date: date.to_string(),
    })
    .collect()
}
