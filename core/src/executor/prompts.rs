use lazy_static::lazy_static;
use minijinja::{context, Environment};

pub const SIMILARITY_SYSTEM_PROMPT: &str = "你是一个严格的相似度判分助手。";
pub const REASONABLENESS_SYSTEM_PROMPT: &str = "你是一个严格的答案判分助手。";

const SIMILARITY_TEMPLATE: &str = "AI的标准答案：{{ ai_text }}\n用户的回答：{{ user_text }}\n请你用0到1的分数严格判定两者内容的相似度，1为完全相同，0为完全不同，只返回分数，不要解释。";
const REASONABLENESS_TEMPLATE: &str = "问题：{{ question }}\n用户的回答：{{ user_text }}\n请你用0到1的分数严格判定用户回答的合理性，1为完全合理，0为完全不合理，只返回分数，不要解释。";

lazy_static! {
    static ref PROMPTS: Environment<'static> = {
        let mut env = Environment::new();
        env.add_template("similarity", SIMILARITY_TEMPLATE)
            .expect("valid similarity template");
        env.add_template("reasonableness", REASONABLENESS_TEMPLATE)
            .expect("valid reasonableness template");
        env
    };
}

pub fn similarity_prompt(ai_text: &str, user_text: &str) -> Result<String, minijinja::Error> {
    PROMPTS
        .get_template("similarity")?
        .render(context! { ai_text, user_text })
}

pub fn reasonableness_prompt(question: &str, user_text: &str) -> Result<String, minijinja::Error> {
    PROMPTS
        .get_template("reasonableness")?
        .render(context! { question, user_text })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_similarity_prompt() {
        let prompt = similarity_prompt(
            "AI is artificial intelligence.",
            "AI means artificial intelligence.",
        )
        .unwrap();
        assert!(prompt.starts_with("AI的标准答案：AI is artificial intelligence.\n"));
        assert!(prompt.contains("用户的回答：AI means artificial intelligence.\n"));
        assert!(prompt.ends_with("只返回分数，不要解释。"));
    }

    #[test]
    fn test_user_text_is_not_interpreted() {
        let prompt = reasonableness_prompt("What is AI?", "{{ question }} <b>&</b>").unwrap();
        assert!(prompt.contains("用户的回答：{{ question }} <b>&</b>\n"));
    }
}
