//! RegisterMemberHandler - Invite-gated member self-registration.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, UserId};
use crate::domain::invite::{self, MasterKeys};
use crate::domain::member::{Member, MemberProfile};
use crate::ports::{EmailMessage, InviteKeyRepository, Mailer, MemberRepository};

/// Registration request: the invite key plus the registrant's profile.
#[derive(Debug, Clone)]
pub struct RegisterMemberCommand {
    pub invite_key: String,
    pub profile: MemberProfile,
}

/// Handler for the public registration endpoint.
///
/// The flow is check key, create member, consume key, send emails, in that
/// order. The key is consumed only after the member write succeeds, so a
/// failed write never burns a key. The consume itself is a conditional
/// update; losing the race after the member exists is logged and not
/// surfaced to the registrant.
pub struct RegisterMemberHandler {
    invites: Arc<dyn InviteKeyRepository>,
    members: Arc<dyn MemberRepository>,
    mailer: Arc<dyn Mailer>,
    master_keys: MasterKeys,
    notify_email: String,
}

impl RegisterMemberHandler {
    pub fn new(
        invites: Arc<dyn InviteKeyRepository>,
        members: Arc<dyn MemberRepository>,
        mailer: Arc<dyn Mailer>,
        master_keys: MasterKeys,
        notify_email: impl Into<String>,
    ) -> Self {
        Self {
            invites,
            members,
            mailer,
            master_keys,
            notify_email: notify_email.into(),
        }
    }

    pub async fn handle(&self, command: RegisterMemberCommand) -> Result<Member, DomainError> {
        let key = command.invite_key.trim();

        if invite::validate_format(key).is_err() {
            return Err(key_invalid());
        }

        let is_master = self.master_keys.contains(key);
        if !is_master {
            match self.invites.find(key).await? {
                None => return Err(key_invalid()),
                Some(record) if record.consumed => {
                    return Err(DomainError::new(
                        ErrorCode::KeyConsumed,
                        "Invite key has already been used",
                    ))
                }
                Some(_) => {}
            }
        }

        let member = Member::register(command.profile)?;
        self.members.create(&member).await?;

        if !is_master {
            let consumer = UserId::new(member.id.to_string()).map_err(DomainError::from)?;
            match self
                .invites
                .consume_if_unconsumed(key, &consumer, Timestamp::now())
                .await
            {
                Ok(true) => {}
                Ok(false) => {
                    tracing::warn!(
                        member_id = %member.id,
                        "invite key was consumed concurrently after member creation"
                    );
                }
                Err(e) => {
                    tracing::warn!(
                        member_id = %member.id,
                        error = %e,
                        "failed to mark invite key consumed after member creation"
                    );
                }
            }
        }

        self.send_emails(&member).await?;

        Ok(member)
    }

    async fn send_emails(&self, member: &Member) -> Result<(), DomainError> {
        let welcome = EmailMessage {
            to: member.email.clone(),
            subject: "Cadastro confirmado".to_string(),
            html_body: format!(
                "<p>Olá {},</p><p>Seu cadastro foi recebido com sucesso. Bem-vindo(a)!</p>",
                member.name
            ),
        };
        self.mailer.send(&welcome).await?;

        let notify = EmailMessage {
            to: self.notify_email.clone(),
            subject: format!("Novo cadastro: {}", member.name),
            html_body: format!(
                "<p>Novo membro cadastrado.</p><ul><li>Nome: {}</li><li>Instrumento: {}</li><li>Email: {}</li><li>Cidade: {}/{}</li></ul>",
                member.name, member.instrument, member.email, member.city, member.state
            ),
        };
        self.mailer.send(&notify).await
    }
}

fn key_invalid() -> DomainError {
    DomainError::new(ErrorCode::KeyInvalid, "Invite key is not valid")
}
