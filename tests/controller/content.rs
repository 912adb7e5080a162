use axum::extract::State;
use slotshare::{
    model::content::{AnswerQnaDto, CreateQnaDto, QnaDto},
    server::controller::{
        content::qna::{answer_question, ask_question, list_questions},
        util::{
            admin::AdminAccess,
            extract::{JsonBody, PathParam},
        },
    },
};

use super::*;

/// Expect a posted question to be answerable and listed with its answer
#[tokio::test]
async fn asks_and_answers_question() -> Result<(), TestError> {
    let test = TestBuilder::new().with_store_tables().build().await?;
    let state = test.into_app_state();

    let resp = respond(
        ask_question(
            State(state.clone()),
            JsonBody(CreateQnaDto {
                author_name: "Lee".to_string(),
                author_email: "lee@example.com".to_string(),
                title: "Renewal".to_string(),
                content: "Can I renew early?".to_string(),
            }),
        )
        .await,
    );
    assert_eq!(resp.status(), StatusCode::CREATED);
    let question: QnaDto = json_body(resp).await;
    assert!(question.answer.is_none());

    let answered = answer_question(
        AdminAccess,
        State(state.clone()),
        PathParam(question.id),
        JsonBody(AnswerQnaDto {
            answer: "Yes, use the extend option.".to_string(),
        }),
    )
    .await;
    assert_eq!(status_of(answered), StatusCode::OK);

    let listed: Vec<QnaDto> = json_body(respond(list_questions(State(state)).await)).await;
    assert_eq!(listed.len(), 1);
    assert!(listed[0].answered_at.is_some());

    Ok(())
}
