use chrono::NaiveDate;
use sea_orm::*;
use serde_json::json;
use tracing::info;

use crate::entity::{profile, project, project_skill, skill, social_links, work_experience};

/// Reset all tables and insert the sample portfolio data set.
///
/// Used by the `seed` binary and by integration tests that need a known
/// store state.
pub async fn seed_sample_data(db: &DatabaseConnection) -> Result<(), DbErr> {
    // Clear existing data, join table first.
    project_skill::Entity::delete_many().exec(db).await?;
    project::Entity::delete_many().exec(db).await?;
    skill::Entity::delete_many().exec(db).await?;
    work_experience::Entity::delete_many().exec(db).await?;
    social_links::Entity::delete_many().exec(db).await?;
    profile::Entity::delete_many().exec(db).await?;

    profile::ActiveModel {
        name: Set("John Doe".into()),
        email: Set("john.doe@example.com".into()),
        education: Set("Bachelor of Science in Computer Science".into()),
        bio: Set("Experienced software engineer with a passion for building scalable web applications.".into()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let mut skills = Vec::new();
    for name in ["Python", "Django", "PostgreSQL", "JavaScript", "React"] {
        let model = skill::ActiveModel {
            name: Set(name.into()),
            ..Default::default()
        }
        .insert(db)
        .await?;
        skills.push(model);
    }
    let [python, django, postgresql, javascript, react] = &skills[..] else {
        return Err(DbErr::Custom("Unexpected seed skill count".into()));
    };

    let ecommerce = project::ActiveModel {
        title: Set("E-commerce Platform".into()),
        description: Set("A full-stack e-commerce platform built with Django and React.".into()),
        links: Set(json!({
            "github": "https://github.com/johndoe/ecommerce",
            "demo": "https://ecommerce-demo.com"
        })),
        ..Default::default()
    }
    .insert(db)
    .await?;
    link_skills(db, &ecommerce, &[python, django, postgresql, javascript, react]).await?;

    let task_app = project::ActiveModel {
        title: Set("Task Management App".into()),
        description: Set("A simple task management application using Django REST Framework.".into()),
        links: Set(json!({"github": "https://github.com/johndoe/taskapp"})),
        ..Default::default()
    }
    .insert(db)
    .await?;
    link_skills(db, &task_app, &[python, django, postgresql]).await?;

    let portfolio = project::ActiveModel {
        title: Set("Portfolio Website".into()),
        description: Set(
            "Personal portfolio website built with React and hosted on GitHub Pages.".into(),
        ),
        links: Set(json!({
            "github": "https://github.com/johndoe/portfolio",
            "demo": "https://johndoe.github.io/portfolio"
        })),
        ..Default::default()
    }
    .insert(db)
    .await?;
    link_skills(db, &portfolio, &[javascript, react]).await?;

    work_experience::ActiveModel {
        company: Set("Tech Corp".into()),
        role: Set("Senior Software Engineer".into()),
        description: Set(
            "Developed and maintained web applications using Python and Django.".into(),
        ),
        start_date: Set(date(2020, 1, 1)?),
        end_date: Set(None),
        ..Default::default()
    }
    .insert(db)
    .await?;

    work_experience::ActiveModel {
        company: Set("Startup Inc".into()),
        role: Set("Full Stack Developer".into()),
        description: Set("Built responsive web apps with React and Node.js.".into()),
        start_date: Set(date(2018, 6, 1)?),
        end_date: Set(Some(date(2019, 12, 31)?)),
        ..Default::default()
    }
    .insert(db)
    .await?;

    social_links::ActiveModel {
        github: Set("https://github.com/johndoe".into()),
        linkedin: Set("https://linkedin.com/in/johndoe".into()),
        portfolio: Set(Some("https://johndoe.com".into())),
        ..Default::default()
    }
    .insert(db)
    .await?;

    info!("Successfully seeded the database");
    Ok(())
}

async fn link_skills(
    db: &DatabaseConnection,
    project: &project::Model,
    skills: &[&skill::Model],
) -> Result<(), DbErr> {
    for s in skills {
        project_skill::ActiveModel {
            project_id: Set(project.id),
            skill_id: Set(s.id),
        }
        .insert(db)
        .await?;
    }
    Ok(())
}

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate, DbErr> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| DbErr::Custom(format!("Invalid seed date {year}-{month}-{day}")))
}
