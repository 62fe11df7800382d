//! Process-wide, read-only vocabularies shared by the scorers

use std::collections::HashSet;
use std::sync::LazyLock;

/// Weight added to a keyword's frequency when it is a recognized technical term.
pub const TECHNICAL_TERM_BONUS: u32 = 3;

/// Curated technology, platform and methodology names.
pub const TECHNICAL_TERMS: &[&str] = &[
    // Programming languages
    "python", "javascript", "typescript", "java", "c#", "c++", "ruby", "php",
    "go", "rust", "kotlin", "swift", "scala", "r", "bash", "shell", "perl",
    // Web frameworks
    "react", "angular", "vue", "svelte", "next.js", "nuxt", "express",
    "django", "flask", "spring", "rails", "laravel", "asp.net", "node.js",
    // Cloud platforms
    "aws", "azure", "gcp", "google cloud", "ibm cloud", "oracle cloud",
    "digitalocean", "heroku", "netlify", "vercel",
    // DevOps & infrastructure
    "kubernetes", "k8s", "docker", "terraform", "ansible", "jenkins",
    "github actions", "gitlab ci", "circleci", "prometheus", "grafana",
    // Databases
    "sql", "nosql", "mongodb", "postgresql", "mysql", "sqlite", "redis",
    "elasticsearch", "dynamodb", "cassandra", "firestore", "mariadb",
    // AI/ML
    "machine learning", "ml", "deep learning", "ai", "artificial intelligence",
    "nlp", "natural language processing", "tensorflow", "pytorch", "keras",
    // Roles & methodologies
    "full stack", "frontend", "backend", "devops", "data engineer", "data scientist",
    "sre", "site reliability", "qa", "quality assurance", "product manager",
    "agile", "scrum", "kanban", "continuous integration",
];

/// Role nouns that earn the title bonus when shared by title and resume.
pub const ROLE_KEYWORDS: &[&str] = &[
    "developer", "engineer", "analyst", "scientist", "manager",
    "programmer", "consultant", "specialist", "architect", "lead",
];

/// Common English stop words, dropped before keyword counting and vectorizing.
pub const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against",
    "all", "almost", "alone", "along", "already", "also", "although", "always",
    "am", "among", "amongst", "an", "and", "another", "any", "anyhow", "anyone",
    "anything", "anyway", "anywhere", "are", "around", "as", "at", "be",
    "became", "because", "become", "becomes", "becoming", "been", "before",
    "beforehand", "behind", "being", "below", "beside", "besides", "between",
    "beyond", "both", "but", "by", "can", "cannot", "could", "did", "do",
    "does", "doing", "done", "down", "due", "during", "each", "either", "else",
    "elsewhere", "enough", "etc", "even", "ever", "every", "everyone",
    "everything", "everywhere", "except", "few", "for", "former", "formerly",
    "from", "further", "had", "has", "have", "having", "he", "hence", "her",
    "here", "hereafter", "hereby", "herein", "hers", "herself", "him",
    "himself", "his", "how", "however", "i", "ie", "if", "in", "indeed",
    "into", "is", "it", "its", "itself", "just", "least", "less", "many",
    "may", "me", "meanwhile", "might", "mine", "more", "moreover", "most",
    "mostly", "much", "must", "my", "myself", "namely", "neither", "never",
    "nevertheless", "no", "nobody", "none", "noone", "nor", "not", "nothing",
    "now", "nowhere", "of", "off", "often", "on", "once", "only", "onto", "or",
    "other", "others", "otherwise", "our", "ours", "ourselves", "out", "over",
    "own", "per", "perhaps", "please", "rather", "same", "seem", "seemed",
    "seeming", "seems", "several", "she", "should", "since", "so", "some",
    "somehow", "someone", "something", "sometime", "sometimes", "somewhere",
    "still", "such", "than", "that", "the", "their", "theirs", "them",
    "themselves", "then", "thence", "there", "thereafter", "thereby",
    "therefore", "therein", "thereupon", "these", "they", "this", "those",
    "though", "through", "throughout", "thru", "thus", "to", "together", "too",
    "toward", "towards", "under", "until", "up", "upon", "us", "very", "via",
    "was", "we", "well", "were", "what", "whatever", "when", "whence",
    "whenever", "where", "whereafter", "whereas", "whereby", "wherein",
    "whereupon", "wherever", "whether", "which", "while", "whither", "who",
    "whoever", "whole", "whom", "whose", "why", "will", "with", "within",
    "without", "would", "yet", "you", "your", "yours", "yourself", "yourselves",
];

static STOP_WORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORDS.iter().copied().collect());

static TECHNICAL_TERM_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| TECHNICAL_TERMS.iter().copied().collect());

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORD_SET.contains(word)
}

/// Exact, lowercase membership in the built-in technical vocabulary.
pub fn is_technical_term(term: &str) -> bool {
    TECHNICAL_TERM_SET.contains(term)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabularies_are_lowercase() {
        for term in TECHNICAL_TERMS.iter().chain(ROLE_KEYWORDS).chain(STOP_WORDS) {
            assert_eq!(*term, term.to_lowercase());
        }
    }

    #[test]
    fn test_membership() {
        assert!(is_technical_term("c++"));
        assert!(is_technical_term("machine learning"));
        assert!(!is_technical_term("Python"));
        assert!(is_stop_word("the"));
        assert!(!is_stop_word("python"));
    }
}
