use common::model::ad::Ad;
use common::model::form_config::FormFieldConfig;
use common::requests::ErrorResponse;
use web_sys::File;

#[derive(Clone)]
pub enum Msg {
    LoadAds,
    AdsLoaded(Vec<Ad>),
    FormConfigLoaded(Vec<FormFieldConfig>),
    LoadFailed(String),
    OpenCreate,
    OpenCopy(String),
    OpenEdit(String),
    CloseEditor,
    SetField(String, String),
    SetFiles(Vec<File>),
    SetReplaceVideos(bool),
    Submit,
    SubmitSucceeded(Ad),
    SubmitFailed(ErrorResponse),
    Delete(String),
    Deleted(String),
    Click(String),
    Clicked { id: String, clicks: u64 },
    VideoEnded,
    ClosePlayer,
}
