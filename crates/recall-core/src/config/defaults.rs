// Single source of truth for all default values.

// --- Gate ---
pub const DEFAULT_SHORT_QUERY_MAX_TOKENS: usize = 2;

pub const DEFAULT_BLOCKLIST: &[&str] = &[
    "pakistan",
    "terrorism",
    "politics",
    "religion",
    "cricket",
    "movie",
    "film",
    "celebrity",
    "actor",
    "actress",
    "sports",
    "news",
    "current events",
    "controversy",
    "scandal",
    "war",
    "conflict",
    "government",
    "president",
    "prime minister",
    "election",
    "vote",
    "party",
    "democrat",
    "republican",
    "liberal",
    "conservative",
    "socialism",
    "capitalism",
    "communism",
];

pub const DEFAULT_ALLOWLIST: &[&str] = &[
    "you",
    "your",
    "skills",
    "experience",
    "project",
    "education",
    "internship",
    "work",
    "portfolio",
    "job",
    "career",
    "knowledge",
    "language",
    "programming",
    "tool",
    "technology",
    "cloud",
    "devops",
    "dream",
    "weakness",
    "strength",
    "background",
    "college",
    "university",
    "degree",
    "cgpa",
    "gpa",
    "name",
    "vrk",
    "github",
    "deployment",
    "aws",
    "docker",
    "kubernetes",
    "terraform",
    "ansible",
    "jenkins",
    "automation",
    "yourself",
    "accomplishment",
    "achievement",
    "goal",
    "aspiration",
];

// --- Response ---
pub const DEFAULT_HEDGE_THRESHOLD: f64 = 0.65;
pub const DEFAULT_CONFIDENT_THRESHOLD: f64 = 0.75;
pub const DEFAULT_HEDGE_CLAUSE: &str = "\n\n(I'm not very confident about this answer.)";
pub const DEFAULT_SIGNATURE: &str = "Feel free to ask me about VRK's skills, projects, and experience!";
pub const DEFAULT_SIGNATURE_SEPARATOR: &str = ". ";
pub const DEFAULT_NO_MATCH_ANSWER: &str =
    "I don't have information about that in my knowledge base.";
pub const DEFAULT_REJECTION_MESSAGE: &str = "I don't have specific information about that in my knowledge base. I can only answer questions about VRK's professional background and portfolio.";
pub const DEFAULT_OFF_TOPIC_MESSAGE: &str =
    "I'm sorry, I can only answer questions about VRK's professional background and portfolio.";
pub const DEFAULT_EMPTY_KNOWLEDGE_MESSAGE: &str =
    "I'm sorry, my knowledge base is empty. Please try again later.";
pub const DEFAULT_PROCESSING_ERROR_MESSAGE: &str =
    "I'm sorry, I encountered an error processing your query.";

// --- Embeddings ---
pub const DEFAULT_EMBEDDING_PROVIDER: &str = "tfidf";
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 384; // all-MiniLM-L6-v2
pub const DEFAULT_L1_CACHE_SIZE: u64 = 10_000;
pub const DEFAULT_FALLBACK_TO_TFIDF: bool = true;
pub const DEFAULT_INTRA_THREADS: usize = 2;
pub const DEFAULT_TOKEN_TYPE_IDS: bool = true;
/// Encoder input limit, special tokens included.
pub const DEFAULT_MAX_SEQUENCE_LEN: usize = 512;

// --- Knowledge ---
pub const DEFAULT_KNOWLEDGE_PATH: &str = "qa_data.json";

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
