pub mod m202510190001_create_users;
pub mod m202510190002_create_roles;
pub mod m202510190003_create_user_roles;
