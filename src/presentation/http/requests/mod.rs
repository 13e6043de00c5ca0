use poem_openapi::Object;

#[derive(Object, Debug)]
pub struct CreateUserRequestDto {
    #[oai(validator(min_length = 1, max_length = 255))]
    pub name: String,
}

#[derive(Object, Debug)]
#[oai(rename_all = "camelCase")]
pub struct CreateMealRequestDto {
    #[oai(validator(min_length = 1, max_length = 255))]
    pub name: String,
    pub description: String,
    pub in_diet: bool,
}

#[derive(Object, Debug)]
#[oai(rename_all = "camelCase")]
pub struct UpdateMealRequestDto {
    #[oai(validator(min_length = 1, max_length = 255))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub in_diet: Option<bool>,
}
