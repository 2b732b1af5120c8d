use postboard_common::model::{Entry, post::Post, user::User};

pub(crate) fn entries() -> Vec<Entry> {
    vec![Entry::Post(Post {
        id: "asc-a123-cxaz-123-acasdas".into(),
        description: "lorem ipsum dolor".to_owned(),
        created_on: "17.01.2023".to_owned(),
        user: User {
            id: "ajn2-sa23m-cmkd2-csmc".into(),
            name: "Suleyman".to_owned(),
            surname: "Dadashov".to_owned(),
            email: "suleyman@code.edu.az".to_owned(),
            password: None,
            age: None,
        },
    })]
}
