//! Catalog shipped with the binary.

use crate::domain::entities::{Catalog, Exam, Lesson, LessonPart, Question, Quiz};

const SAMPLE_VIDEO: &str = "http://d23dyxeqlo5psn.cloudfront.net/big_buck_bunny.mp4";

fn algebra_parts() -> Vec<LessonPart> {
    vec![
        LessonPart::text(
            "This is the first text part of the lesson. Algebra is fun! \
             We will explore variables and equations.",
        )
        .with_title("Part 1: Introduction"),
        LessonPart::video(SAMPLE_VIDEO)
            .with_title("Part 2: Explainer Video")
            .with_estimated_minutes(10),
        LessonPart::text(
            "This is the final summary text. You learned a lot about basic algebra concepts!",
        )
        .with_title("Part 3: Summary"),
        LessonPart::text("Solve: 2x + 5 = 15. What is x?").with_title("Part 4: Practice Problems"),
    ]
}

fn reading_parts() -> Vec<LessonPart> {
    vec![
        LessonPart::video(SAMPLE_VIDEO).with_title("Parte 1"),
        LessonPart::text(
            "Interpretação de textos é a habilidade de compreender, analisar e refletir sobre \
             o que está escrito, mesmo quando nem tudo está dito de forma direta. Em concursos \
             públicos, essa habilidade é essencial, pois muitas perguntas exigem que você \
             entenda a intenção do autor ou leia nas entrelinhas.",
        )
        .with_title("Parte 2: O que é Interpretação de Textos?"),
        LessonPart::text(
            "Leia com atenção: evite pular trechos ou \"passar o olho\".\n\
             Fique atento às palavras de ligação (portanto, porém, além disso).\n\
             Observe o título: ele costuma antecipar o tema central.\n\
             Identifique o objetivo do autor: ele quer informar, convencer ou emocionar?\n\
             Cuidado com ironias ou críticas sutis.",
        )
        .with_title("Parte 3: Dicas para Interpretar Melhor"),
        LessonPart::text(
            "Leia a pergunta antes do texto! Isso ajuda você a já buscar as informações \
             certas, evitando distrações.",
        )
        .with_title("Parte 4: Dica Rápida"),
        LessonPart::text(
            "Texto: João sempre foi o último a ser escolhido no time de futebol da escola. \
             Mesmo assim, nunca reclamava. Apenas sorria e ia para o gol, onde ninguém queria \
             jogar.\n\nPergunta: O que o texto sugere sobre João?\n\nResposta esperada: Que ele \
             não era bom no futebol, mas aceitava sua posição com humildade, sem demonstrar \
             tristeza ou revolta.",
        )
        .with_title("Parte 5: Exemplo Prático"),
        LessonPart::text(
            "Você aprendeu o que é interpretação de textos, como identificar sentidos \
             implícitos e estratégias para entender melhor o que o autor quer comunicar. \
             A prática constante é essencial!",
        )
        .with_title("Parte 6: Resumo Final"),
    ]
}

fn concursos_questions() -> Vec<Question> {
    vec![
        Question::new(
            1,
            "Qual o órgão responsável pela fiscalização do sistema financeiro nacional?",
            vec![
                "Banco Central do Brasil".into(),
                "Conselho Monetário Nacional".into(),
                "Comissão de Valores Mobiliários".into(),
                "Agência Nacional de Saúde Suplementar".into(),
            ],
            "Banco Central do Brasil",
        ),
        Question::new(
            2,
            "Qual é a capital do Estado de Minas Gerais?",
            vec![
                "Belo Horizonte".into(),
                "Uberlândia".into(),
                "Juiz de Fora".into(),
                "Contagem".into(),
            ],
            "Belo Horizonte",
        ),
        Question::new(
            3,
            "Em qual ano foi promulgada a Constituição Federal do Brasil?",
            vec!["1988".into(), "1990".into(), "1986".into(), "1992".into()],
            "1988",
        ),
    ]
}

fn past_exams() -> Vec<Exam> {
    let enem = [2023, 2022, 2021, 2020, 2019, 2017]
        .into_iter()
        .map(|year| Exam::new("ENEM", year));
    let unicamp = std::iter::once(Exam::new("Unicamp", 2023));
    let bdb = [2020, 2018, 2016, 2014, 2012, 2010]
        .into_iter()
        .map(|year| Exam::new("BDB", year));
    enem.chain(unicamp).chain(bdb).collect()
}

/// Content available when no catalog file is configured.
#[must_use]
pub fn builtin_catalog() -> Catalog {
    Catalog {
        lessons: vec![
            Lesson::new("algebra-intro", "Introduction to Algebra", algebra_parts()),
            Lesson::new("interpretacao-de-texto", "Interpretação de Texto", reading_parts()),
            Lesson::new("correios-intro", "Introdução: Correios", algebra_parts()),
        ],
        quizzes: vec![Quiz {
            id: "concursos".into(),
            title: "Quiz de Concursos".into(),
            questions: concursos_questions(),
        }],
        exams: past_exams(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::PartKind;

    #[test]
    fn test_builtin_catalog_contents() {
        let catalog = builtin_catalog();
        assert_eq!(catalog.lessons.len(), 3);
        assert_eq!(catalog.quizzes.len(), 1);

        let algebra = catalog.lesson("algebra-intro").unwrap();
        let kinds: Vec<_> = algebra.parts.iter().map(LessonPart::kind).collect();
        assert_eq!(
            kinds,
            [PartKind::Text, PartKind::Video, PartKind::Text, PartKind::Text]
        );
    }

    #[test]
    fn test_builtin_exams_by_board() {
        let catalog = builtin_catalog();
        let boards: Vec<(&str, usize)> = catalog
            .search_exams("")
            .into_iter()
            .map(|(board, exams)| (board, exams.len()))
            .collect();
        assert_eq!(boards, [("ENEM", 6), ("Unicamp", 1), ("BDB", 6)]);

        let enem_2021 = catalog.search_exams("enem 2021");
        assert_eq!(enem_2021.len(), 1);
        assert_eq!(enem_2021[0].1.len(), 1);
    }

    #[test]
    fn test_builtin_content_is_loaded() {
        let catalog = builtin_catalog();
        assert!(catalog
            .lessons
            .iter()
            .flat_map(|lesson| &lesson.parts)
            .all(LessonPart::is_loaded));
    }

    #[test]
    fn test_quiz_answers_are_offered() {
        let quiz = builtin_catalog().quizzes.remove(0);
        for question in &quiz.questions {
            assert!(question.options.contains(&question.answer), "question {}", question.id);
        }
    }
}
