use super::*;
use actix_web::HttpResponse;
use actix_web::web;
use roster_auth::Admin;
use roster_core::ID;
use roster_dto::CreateMember;
use roster_dto::MemberView;
use roster_dto::Message;
use roster_dto::UpdateMember;

/// Ids that do not parse cannot name a member.
fn parse_id(path: web::Path<String>) -> Result<ID<Member>, MemberError> {
    path.parse::<ID<Member>>().map_err(|_| MemberError::NotFound)
}

pub async fn list(_: Admin, roster: web::Data<Roster>) -> Result<HttpResponse, MemberError> {
    let members = roster.list().await?;
    Ok(HttpResponse::Ok().json(members.iter().map(MemberView::from).collect::<Vec<_>>()))
}

pub async fn create(
    admin: Admin,
    roster: web::Data<Roster>,
    req: web::Json<CreateMember>,
) -> Result<HttpResponse, MemberError> {
    let member = roster.create(&req.username, &req.password).await?;
    log::info!("[members] {} added {}", admin.name(), member.username());
    Ok(HttpResponse::Created().json(MemberView::from(&member)))
}

pub async fn update(
    admin: Admin,
    roster: web::Data<Roster>,
    path: web::Path<String>,
    req: web::Json<UpdateMember>,
) -> Result<HttpResponse, MemberError> {
    let id = parse_id(path)?;
    let member = roster.update(id, &req.username, req.password()).await?;
    log::info!("[members] {} updated {}", admin.name(), member.username());
    Ok(HttpResponse::Ok().json(MemberView::from(&member)))
}

pub async fn delete(
    admin: Admin,
    roster: web::Data<Roster>,
    path: web::Path<String>,
) -> Result<HttpResponse, MemberError> {
    let id = parse_id(path)?;
    roster.delete(id).await?;
    log::info!("[members] {} deleted {}", admin.name(), id);
    Ok(HttpResponse::Ok().json(Message {
        message: "Member deleted successfully.".to_string(),
    }))
}
